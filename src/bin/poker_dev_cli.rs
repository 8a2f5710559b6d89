// src/bin/poker_dev_cli.rs

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use poker_hand_engine::api::{build_table_view, to_json};
use poker_hand_engine::domain::chips::Chips;
use poker_hand_engine::domain::table::TableConfig;
use poker_hand_engine::domain::SeatIndex;
use poker_hand_engine::driver::{
    CallingStation, Decider, HandRunner, HumanDecider, RandomBot, DEFAULT_MAX_INVALID,
};
use poker_hand_engine::engine::{PokerGame, RandomSource};
use poker_hand_engine::eval::describe_hand;
use poker_hand_engine::infra::{init_logging, load_table_config, DeterministicRng, SystemRng};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BotKind {
    Random,
    Calling,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Dev-CLI: раздачи no-limit покера с одним блайндом", long_about = None)]
struct Args {
    /// JSON-конфиг стола (имена, стеки, big blind).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Число игроков, если конфиг не задан.
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// Стартовый стек, если конфиг не задан.
    #[arg(long, default_value_t = 1000)]
    stack: u64,

    /// Big blind, если конфиг не задан.
    #[arg(long, default_value_t = 20)]
    big_blind: u64,

    /// Сколько раздач сыграть максимум.
    #[arg(long, default_value_t = 10)]
    hands: u64,

    /// Seed для воспроизводимых раздач.
    #[arg(long)]
    seed: Option<u64>,

    /// Места, за которые играет человек (можно повторять).
    #[arg(long)]
    human: Vec<SeatIndex>,

    /// Кто играет за остальные места.
    #[arg(long, value_enum, default_value_t = BotKind::Random)]
    bots: BotKind,

    /// Отказов подряд до принудительного fold.
    #[arg(long, default_value_t = DEFAULT_MAX_INVALID)]
    max_invalid: u32,

    /// Печатать стол в JSON после каждой раздачи.
    #[arg(long)]
    json: bool,

    /// Подробный лог (debug).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => load_table_config(path)?,
        None => TableConfig::uniform(
            (1..=args.players).map(|i| format!("Player {i}")),
            Chips(args.stack),
            Chips(args.big_blind),
        ),
    };
    let mut game = PokerGame::from_config(&config)?;

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let mut deciders: Vec<Box<dyn Decider>> = (0..game.seat_count())
        .map(|seat| -> Box<dyn Decider> {
            if args.human.contains(&seat) {
                Box::new(HumanDecider)
            } else {
                match args.bots {
                    BotKind::Random => Box::new(RandomBot::from_seed(base_seed.wrapping_add(seat as u64))),
                    BotKind::Calling => Box::new(CallingStation),
                }
            }
        })
        .collect();

    println!(
        "poker_dev_cli: {} мест, big blind {}",
        game.seat_count(),
        game.big_blind
    );

    match args.seed {
        Some(seed) => play(args, &mut game, &mut DeterministicRng::from_seed(seed), &mut deciders)?,
        None => play(args, &mut game, &mut SystemRng, &mut deciders)?,
    }

    println!();
    println!("================ ИТОГ ================");
    for (seat, player) in game.players.iter().enumerate() {
        println!("[{seat}] {:<16} {}", player.name, player.stack);
    }
    Ok(())
}

fn play<R: RandomSource>(
    args: &Args,
    game: &mut PokerGame,
    rng: &mut R,
    deciders: &mut [Box<dyn Decider>],
) -> Result<(), Box<dyn std::error::Error>> {
    let runner = HandRunner::new(args.max_invalid);

    for _ in 0..args.hands {
        if game.num_funded_players() < 2 {
            println!("Фишки остались меньше чем у двух игроков – стоп.");
            break;
        }

        let summary = runner.play_hand(game, rng, deciders)?;

        println!();
        println!(
            "Раздача #{}: банк {}, дошли до {}",
            summary.hand_number, summary.total_pot, summary.phase_reached
        );
        for result in summary.winners() {
            let hand = result.strength.map(describe_hand).unwrap_or("без вскрытия");
            println!("  {} забирает {} ({hand})", result.name, result.won);
        }

        if args.json {
            println!("{}", to_json(&build_table_view(game, None))?);
        }
    }
    Ok(())
}

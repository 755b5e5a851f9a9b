//! Headless driver for the gacha engine.
//!
//! Usage:
//!   gacha-engine [--data-dir DIR] [--content-dir DIR] [--seed N] <command>
//!
//! Commands:
//!   status                    Wallet, account, team, and skill states
//!   create <name> [element]   Add a level-1 character
//!   battle [--actions N] [--event]
//!                             Fight N actions against the opponent pool
//!   summon single|multi       Spend crystals on the roster pool

use gacha_engine::character::{EffectiveStats, Element};
use gacha_engine::config::{ConfigError, GameConfig};
use gacha_engine::content::{ContentLoader, JsonDirLoader};
use gacha_engine::core::constants::*;
use gacha_engine::core::game_state::GameState;
use gacha_engine::economy::{Currency, CurrencyLedger};
use gacha_engine::encounter::{EncounterMode, EncounterSession};
use gacha_engine::error::{ContentError, GameError};
use gacha_engine::items::ItemCatalog;
use gacha_engine::persistence::{FileStore, KeyValueStore, MemoryStore};
use gacha_engine::skills::{now_millis, SkillBook, SkillState};
use rand::rngs::StdRng;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_BATTLE_ACTIONS: u32 = 20;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("{0}")]
    Usage(String),
}

fn main() -> ExitCode {
    init_tracing();

    let env = |key: &str| std::env::var(key).ok();
    let result = GameConfig::from_env_and_args(env, std::env::args().skip(1))
        .map_err(CliError::from)
        .and_then(|(config, rest)| run(&config, &rest));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            eprintln!("Run 'gacha-engine --help' for usage.");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_usage() {
    println!(
        "Gacha Engine - character progression and combat\n\
         \n\
         Usage: gacha-engine [OPTIONS] <COMMAND>\n\
         \n\
         Commands:\n\
         \x20 status                      Show wallet, account, team, and skills\n\
         \x20 create <name> [element]     Create a level-1 character\n\
         \x20 battle [--actions N] [--event]\n\
         \x20                             Fight N actions (default: {DEFAULT_BATTLE_ACTIONS})\n\
         \x20 summon single|multi         Summon for {SINGLE_SUMMON_COST} or {MULTI_SUMMON_COST} crystals\n\
         \n\
         Options:\n\
         \x20 --data-dir DIR     Profile directory (env GACHA_DATA_DIR, default ~/.gacha)\n\
         \x20 --content-dir DIR  Content JSON directory (env GACHA_CONTENT_DIR, default ./content)\n\
         \x20 --seed N           RNG seed for reproducible runs\n\
         \x20 --version, -v      Show version information\n\
         \x20 --help, -h         Show this help"
    );
}

fn run(config: &GameConfig, args: &[String]) -> Result<(), CliError> {
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };
    let rest = &args[1..];

    match command.as_str() {
        "--version" | "-v" => {
            println!("gacha-engine {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        _ => {}
    }

    let mut store = open_store(config);
    let mut state = GameState::load(store.as_ref());
    let loader = JsonDirLoader::new(&config.content_dir);
    let mut rng = config.make_rng();

    match command.as_str() {
        "status" => {
            print_status(&state);
            return Ok(());
        }
        "create" => run_create(&mut state, rest)?,
        "battle" => run_battle(&mut state, &loader, &mut rng, rest)?,
        "summon" => run_summon(&mut state, &loader, &mut rng, rest)?,
        other => return Err(CliError::Usage(format!("Unknown command: {other}"))),
    }

    if !state.save(store.as_mut()) {
        eprintln!("warning: progress could not be saved");
    }
    Ok(())
}

/// Falls back to an in-memory store so the session still runs.
fn open_store(config: &GameConfig) -> Box<dyn KeyValueStore> {
    match FileStore::open(&config.data_dir) {
        Ok(store) => Box::new(store),
        Err(err) => {
            tracing::warn!(
                dir = %config.data_dir.display(),
                error = %err,
                "profile directory unavailable, progress will not persist"
            );
            Box::new(MemoryStore::new())
        }
    }
}

fn print_status(state: &GameState) {
    println!(
        "Coins: {}  Crystals: {}",
        state.wallet.balance(Currency::Coins),
        state.wallet.balance(Currency::Crystals)
    );
    println!("Account level: {}", state.account.level);

    if state.roster.is_empty() {
        println!("No characters yet. Try 'create <name>' or 'summon single'.");
        return;
    }

    let now = now_millis();
    for character in &state.roster {
        let marker = if state.account.team.contains(&character.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {} [{}] Lv {} ({}/{} exp)  ATK {} DEF {}",
            character.name,
            character.element.name(),
            character.level,
            character.exp,
            character.exp_to_next_level,
            character.attack,
            character.defense
        );
        let book = SkillBook::new(character.id.clone());
        for (skill, skill_state) in book.states(character, now) {
            let label = match skill_state {
                SkillState::Locked => format!("locked (Lv {})", skill.level),
                SkillState::Ready => "ready".to_string(),
                SkillState::Cooling { remaining_ms } => format!("{remaining_ms} ms"),
            };
            println!("      {:<12} {label}", skill.name);
        }
    }

    let latest = state.summons.latest_draw();
    if !latest.is_empty() {
        let names: Vec<&str> = latest.iter().map(|r| r.character.name.as_str()).collect();
        println!("Latest draw: {}", names.join(", "));
    }
}

fn run_create(state: &mut GameState, args: &[String]) -> Result<(), CliError> {
    let name = args
        .first()
        .ok_or_else(|| CliError::Usage("create requires a name".to_string()))?;
    let element = match args.get(1) {
        Some(raw) => Element::parse(raw)
            .ok_or_else(|| CliError::Usage(format!("Unknown element: {raw}")))?,
        None => Element::default(),
    };
    let id = state.create_character(name, element);
    println!("Created {name} ({}) with id {id}", element.name());
    Ok(())
}

fn run_battle<L: ContentLoader>(
    state: &mut GameState,
    loader: &L,
    rng: &mut StdRng,
    args: &[String],
) -> Result<(), CliError> {
    let mut actions = DEFAULT_BATTLE_ACTIONS;
    let mut mode = EncounterMode::Battle;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--actions" => {
                i += 1;
                actions = args
                    .get(i)
                    .and_then(|raw| raw.parse().ok())
                    .ok_or_else(|| CliError::Usage("--actions requires a number".to_string()))?;
            }
            "--event" => mode = EncounterMode::Event,
            other => return Err(CliError::Usage(format!("Unknown battle option: {other}"))),
        }
        i += 1;
    }

    let catalog = loader.load()?;
    let items = ItemCatalog::from_items(catalog.items.clone());
    let lead_id = state.lead_character_id();
    let player_attack = state
        .lead_character()
        .map(|c| EffectiveStats::resolve(c, &items).attack)
        .filter(|&attack| attack > 0)
        .unwrap_or(STARTING_PLAYER_ATTACK);

    let mut session = EncounterSession::new(mode, player_attack);
    let opponent = session.start(&catalog, rng)?;
    println!("{} appears! ({} HP)", opponent.name, opponent.max_hp);

    let mut book = SkillBook::new(lead_id.clone().unwrap_or_default());
    let mut now = now_millis();

    for _ in 0..actions {
        let activation = lead_id
            .as_deref()
            .and_then(|id| state.character(id))
            .and_then(|character| {
                let stats = session.acting_stats(EffectiveStats::resolve(character, &items));
                let skill_id = book.best_ready(character, Some(&stats), now)?;
                book.activate(character, &skill_id, Some(&stats), now)
            });
        let outcome = match &activation {
            Some(activation) => session.apply_power(activation.power)?,
            None => session.strike()?,
        };
        let move_name = activation.as_ref().map_or("strike", |a| a.skill_id.as_str());
        println!(
            "  {move_name}: {} damage ({} HP left)",
            outcome.damage, outcome.remaining_hp
        );

        if outcome.defeated {
            let character = lead_id
                .as_deref()
                .and_then(|id| state.roster.iter_mut().find(|c| c.id == id));
            let defeat =
                session.resolve_defeat(&mut state.wallet, &mut state.account, character, rng)?;
            println!(
                "{} defeated! +{} coins +{} crystals (account Lv {}, next HP {})",
                defeat.defeated.name,
                defeat.coins,
                defeat.crystals,
                defeat.account_level,
                defeat.next_max_hp
            );

            if let (Some(change), Some(id)) = (defeat.level_change, lead_id.as_deref()) {
                if change.leveled_up() {
                    println!("Level up! Lv {}", change.level_after);
                    if let Some(character) = state.roster.iter().find(|c| c.id == id) {
                        let unlocked = state.unlocks.detect_unlocks(character, change.level_before);
                        for skill_id in unlocked {
                            println!("New skill unlocked: {skill_id}");
                        }
                    }
                }
            }
            if let Some(next) = session.opponent() {
                println!("{} appears! ({} HP)", next.name, next.max_hp);
            }
        }

        let next_action = now + ACTION_INTERVAL_MS;
        while now < next_action {
            now += COOLDOWN_POLL_INTERVAL_MS;
            for skill_id in book.poll(now) {
                tracing::debug!(skill = %skill_id, "skill ready");
            }
        }
    }

    println!(
        "Run over: {} defeated. Coins {} Crystals {}",
        session.defeat_count(),
        state.wallet.balance(Currency::Coins),
        state.wallet.balance(Currency::Crystals)
    );
    session.end();
    Ok(())
}

fn run_summon<L: ContentLoader>(
    state: &mut GameState,
    loader: &L,
    rng: &mut StdRng,
    args: &[String],
) -> Result<(), CliError> {
    let catalog = loader.load()?;
    let drawn = match args.first().map(String::as_str) {
        Some("single") => state
            .summons
            .single_summon(&mut state.wallet, &catalog.roster, rng)?
            .to_vec(),
        Some("multi") => state
            .summons
            .multi_summon(&mut state.wallet, &catalog.roster, rng)?
            .to_vec(),
        _ => return Err(CliError::Usage("summon requires 'single' or 'multi'".to_string())),
    };

    for (i, record) in drawn.iter().enumerate() {
        println!(
            "  {}. {} [{}]",
            i + 1,
            record.character.name,
            record.character.element.name()
        );
    }
    let added = state.add_summoned(&drawn);
    println!(
        "{} new character(s). Crystals left: {}",
        added.len(),
        state.wallet.balance(Currency::Crystals)
    );
    Ok(())
}

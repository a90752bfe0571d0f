use anyhow::Result;
use ba_core::config::ConvertConfig;
use clap::Parser;

pub mod cli;
pub mod convert;
pub mod flavor;
pub mod output;
pub mod playback;
pub mod progress;
pub mod stats;

fn main() {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging (stderr)
    env_logger::Builder::new()
        .filter_level(cli.log_filter())
        .init();

    // 3. Lister les jeux de caractères
    if cli.list_sets {
        for (name, glyphs) in ba_core::charset::registry() {
            println!("{name:>10}: {glyphs}");
        }
        return;
    }

    // 4. Charger la config puis appliquer les overrides CLI
    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => fail(&e, None),
    };
    let mut flavor = flavor::Flavor::new(&config);
    if let Some(banner) = flavor.banner() {
        eprintln!("{banner}");
    }
    log::debug!(
        "Plateforme : {}/{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );

    // 5. Convertir
    let Some(input) = cli.input.as_deref() else {
        return;
    };
    match convert::convert(&config, input, cli.output.as_deref()) {
        Ok(stats) => {
            if config.benchmark && !config.silent {
                eprint!("{}", stats.report());
            }
            for line in flavor.finale() {
                eprintln!("{line}");
            }
        }
        Err(e) => fail(&e, Some(&flavor)),
    }
}

fn fail(e: &anyhow::Error, flavor: Option<&flavor::Flavor>) -> ! {
    eprintln!("❌ Conversion failed: {e:#}");
    if let Some(quip) = flavor.and_then(flavor::Flavor::failure_quip) {
        eprintln!("{quip}");
    }
    std::process::exit(1);
}

/// Defaults, then the TOML file when present, then CLI flags.
fn resolve_config(cli: &cli::Cli) -> Result<ConvertConfig> {
    let mut config = if cli.config.exists() {
        ba_core::config::load_config(&cli.config)?
    } else {
        log::debug!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        ConvertConfig::default()
    };
    cli.apply_overrides(&mut config)?;
    Ok(config)
}

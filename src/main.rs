use krsh::core::config::{Config, ConfigPaths};
use krsh::flags::Flags;
use krsh::shell::{self, SessionEnd};
use std::env;
use std::io::Write;

fn main() -> Result<(), krsh::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("krsh {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    krsh::logging::init(krsh::logging::level_for(
        flags.is_set("quiet"),
        flags.is_set("debug"),
    ))?;

    let paths = match flags.get_value("config") {
        Some(path) => ConfigPaths::explicit(path),
        None => ConfigPaths::new(),
    };
    let config = Config::load(&paths)?;

    match shell::start(&flags, &config)? {
        SessionEnd::Exit => {
            std::io::stdout().flush()?;
            std::process::exit(0);
        }
        SessionEnd::EndOfInput => Ok(()),
    }
}

//! Thin CLI host: builds or loads the environment once, then loops
//! reading one query per line until an empty line is entered.

mod cmdoutput;
mod environment;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use config::Config;
use environment::Environment;
use error::Error;

fn main() -> ExitCode {
    env_logger::init();

    let config = load_config();

    let env = match Environment::load_or_build(&config.snapshot.path, || build_dict(&config.dictionary.source_path)) {
        Ok(env) => env,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    run_repl(&env, config.search.result_limit);
    ExitCode::SUCCESS
}

fn load_config() -> Config {
    let path = PathBuf::from("config.toml");
    if path.exists() {
        match Config::load(&path) {
            Ok(config) => return config,
            Err(err) => log::warn!("failed to load {}: {err}, using defaults", path.display()),
        }
    }
    Config::default()
}

#[cfg(feature = "jmdict-upstream")]
fn build_dict(_source_path: &Path) -> Result<types::Dict, Error> {
    Ok(types::Dict::from_jmdict())
}

#[cfg(not(feature = "jmdict-upstream"))]
fn build_dict(source_path: &Path) -> Result<types::Dict, Error> {
    Err(Error::MissingCorpus(source_path.to_path_buf()))
}

fn run_repl(env: &Environment, result_limit: usize) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Write the word you would like to find or just press Enter to exit the program\n> ");
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let query = line.trim();
        if query.is_empty() {
            break;
        }

        let results = search::search(&env.dict, &env.english, &env.kana, &env.kanji, query);
        println!("You searched for '{query}'\n");
        cmdoutput::print_results(&env.dict, &results, query, result_limit);
    }

    println!("Thank you for using this program!");
}

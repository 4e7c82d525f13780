use std::io::{self, Write};
use std::process;

use uni_parse::{EmojiTestLine, UniFile};

use crate::args::ArgMatches;
use crate::error::Result;

macro_rules! err {
    ($($tt:tt)*) => {
        Err(crate::error::Error::Other(format!($($tt)*)))
    }
}

mod app;
mod args;
mod emoji;
mod error;
mod writer;

fn main() {
    // Warnings about conflicting input are shown by default. RUST_LOG
    // overrides the level.
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .try_init();

    if let Err(err) = run() {
        if err.is_broken_pipe() {
            process::exit(0);
        }
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = app::app().get_matches();
    match matches.subcommand() {
        ("emoji", Some(m)) => emoji::command(ArgMatches::new(m)),
        ("emoji-groups", Some(m)) => {
            emoji::command_groups(ArgMatches::new(m))
        }
        ("test-emoji-test", Some(m)) => {
            cmd_test_emoji_test(ArgMatches::new(m))
        }
        ("", _) => {
            app::app().print_help()?;
            println!("");
            Ok(())
        }
        (unknown, _) => err!("unrecognized command: {}", unknown),
    }
}

fn cmd_test_emoji_test(args: ArgMatches<'_>) -> Result<()> {
    let dir = args.data_dir()?;
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    for result in EmojiTestLine::from_dir(dir)? {
        let (_, line) = result?;
        match line {
            EmojiTestLine::Group(name) => writeln!(stdout, "# group: {}", name)?,
            EmojiTestLine::Subgroup(name) => {
                writeln!(stdout, "# subgroup: {}", name)?
            }
            EmojiTestLine::Sequence(seq) => writeln!(stdout, "{}", seq)?,
        }
    }
    Ok(())
}

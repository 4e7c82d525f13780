use clap::{App, AppSettings, Arg, SubCommand};

const TEMPLATE: &'static str = "\
{bin} {version}
{author}
{about}

USAGE:
    {usage}

SUBCOMMANDS:
{subcommands}

OPTIONS:
{unified}";

const TEMPLATE_SUB: &'static str = "\
{before-help}
USAGE:
    {usage}

ARGS:
{positionals}

OPTIONS:
{unified}";

const ABOUT: &'static str = "
uni-generate is a tool that generates Rust source files containing an emoji
catalog built from the Unicode emoji-test.txt listing.

Each emoji in the catalog is a neutral definition: skin tone and gender
variants are folded into flags on the base emoji instead of being listed
separately. Entries carry their group, subgroup and, optionally, their English
CLDR short names.";

const ABOUT_EMOJI: &'static str = "\
emoji emits the group table, the subgroup table and the catalog of neutral
emoji definitions. Catalog entries appear in the order of emoji-test.txt.

The data directory should contain emoji/emoji-test.txt and, unless --no-cldr
is given, annotations/en.xml from the CLDR. A flat layout with both files
directly in the data directory is also accepted.
";

const ABOUT_EMOJI_GROUPS: &'static str = "\
emoji-groups emits only the group and subgroup tables. CLDR annotations are
never read.
";

const ABOUT_TEST_EMOJI_TEST: &'static str = "\
test-emoji-test parses emoji-test.txt and emits its group markers, subgroup
markers and sequences on stdout. The purpose of this command is to diff the
output with the input and confirm that the data lines are identical. This is a
sanity test on the emoji-test.txt parser.
";

/// Build a clap application.
pub fn app() -> App<'static, 'static> {
    // Various common flags and arguments.
    let flag_name = |default| {
        Arg::with_name("name")
            .long("name")
            .help("Set the name of the table in the emitted code.")
            .takes_value(true)
            .default_value(default)
    };
    let flag_chars = Arg::with_name("chars").long("chars").help(
        "Write codepoints as character literals. If a codepoint \
         cannot be written as a character literal, then it is \
         silently dropped.",
    );
    let flag_out_dir = Arg::with_name("out-dir")
        .long("out-dir")
        .help(
            "Write the tables to a Rust module in the given directory \
             instead of stdout.",
        )
        .takes_value(true);
    let data_dir = Arg::with_name("data-dir")
        .required(true)
        .help("Directory containing emoji-test.txt and the CLDR annotations.");

    // Subcommands.
    let cmd_emoji = SubCommand::with_name("emoji")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Create the emoji catalog tables.")
        .before_help(ABOUT_EMOJI)
        .arg(data_dir.clone())
        .arg(flag_name("EMOJI"))
        .arg(flag_chars)
        .arg(flag_out_dir.clone())
        .arg(
            Arg::with_name("cldr")
                .long("cldr")
                .takes_value(true)
                .help("Read the CLDR annotations from the given file."),
        )
        .arg(
            Arg::with_name("no-cldr")
                .long("no-cldr")
                .conflicts_with("cldr")
                .help("Do not read any CLDR annotations."),
        );
    let cmd_emoji_groups = SubCommand::with_name("emoji-groups")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Create the emoji group and subgroup tables.")
        .before_help(ABOUT_EMOJI_GROUPS)
        .arg(data_dir.clone())
        .arg(flag_name("EMOJI"))
        .arg(flag_out_dir);
    let cmd_test_emoji_test = SubCommand::with_name("test-emoji-test")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Test the emoji-test.txt parser.")
        .before_help(ABOUT_TEST_EMOJI_TEST)
        .arg(data_dir);

    App::new("uni-generate")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(ABOUT)
        .template(TEMPLATE)
        .max_term_width(100)
        .setting(AppSettings::UnifiedHelpMessage)
        .subcommand(cmd_emoji)
        .subcommand(cmd_emoji_groups)
        .subcommand(cmd_test_emoji_test)
}

use std::env;
use std::ffi::OsStr;
use std::io::{self, Write};

use anyhow::Context as _;
use seahorse::{App, Context, Flag, FlagType};

use unisport_abrechnung::bill::Bill;
use unisport_abrechnung::generate_bill;
use unisport_abrechnung::input::Config;
use unisport_abrechnung::time::{BillingPeriod, WeekDay};

const DEFAULT_CONFIG_FILE: &str = "unisport-abrechnung.toml";

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    let args: Vec<String> = env::args().collect();

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!(
            "{} [--config <file>] [period] [participant counts...]",
            args[0]
        ))
        .flag(Flag::new("config", FlagType::String).description(format!(
            "[optional] Path to the configuration file. Default: `{}`",
            DEFAULT_CONFIG_FILE
        )))
        .try_action(run);

    app.run(args);
}

mod seahorse_exts {
    use std::sync::OnceLock;

    use log::error;
    use seahorse::{App, Context};

    type TryAction = fn(_: &Context) -> Result<(), anyhow::Error>;

    static ACTION: OnceLock<TryAction> = OnceLock::new();

    pub trait TryActionExt {
        #[must_use]
        fn try_action(self, action: TryAction) -> Self;
    }

    impl TryActionExt for App {
        fn try_action(self, action: TryAction) -> Self {
            ACTION
                .set(action)
                .expect("try_action may only be set once");
            self.action(|context: &Context| {
                if let Err(e) = ACTION.get().expect("action set above")(context) {
                    error!("{:?}", e);
                    ::std::process::exit(1);
                }
            })
        }
    }
}

use seahorse_exts::TryActionExt;

fn run(context: &Context) -> anyhow::Result<()> {
    let config_file = context
        .string_flag("config")
        .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

    let config = Config::try_from_toml_file(&config_file)?;

    let period: BillingPeriod = match context.args.first() {
        Some(argument) => argument.parse()?,
        None => query_period()?,
    };

    let participant_counts = if context.args.len() > 1 {
        context.args[1..]
            .iter()
            .map(|argument| {
                argument
                    .parse::<u32>()
                    .with_context(|| format!("invalid participant count \"{}\"", argument))
            })
            .collect::<Result<Vec<_>, _>>()?
    } else {
        query_participant_counts(&period, config.class().weekday())?
    };

    let bill = Bill::new(&config, period, participant_counts)?;

    let output = generate_bill(&config, &bill)?;
    println!("{}", output.display());

    Ok(())
}

fn query_line(prompt: &str) -> anyhow::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

fn query_period() -> anyhow::Result<BillingPeriod> {
    Ok(query_line("Billing period (mm/yyyy): ")?.parse()?)
}

/// Asks for the participant count of every session. An empty answer counts
/// as zero, so sessions that did not take place can be skipped with return.
fn query_participant_counts(
    period: &BillingPeriod,
    weekday: WeekDay,
) -> anyhow::Result<Vec<u32>> {
    let mut counts = Vec::new();

    for day in period.matching_days(weekday) {
        let line = query_line(&format!(
            "Participant count for {}.{}.{}: ",
            day,
            period.month(),
            period.year()
        ))?;

        if line.is_empty() {
            counts.push(0);
        } else {
            counts.push(
                line.parse()
                    .with_context(|| format!("invalid participant count \"{}\"", line))?,
            );
        }
    }

    Ok(counts)
}

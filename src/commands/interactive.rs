use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;
use tracing::warn;

use kapasitas_models::{models::production::capacity::InputField, support::locale::Locale};

use crate::{
    render,
    session::{Command, ModelKind, Outcome, Session, parse_line},
    settings::{RecomputeTrigger, Settings},
};

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Which model to feed
    #[arg(long, value_enum, default_value = "height")]
    pub model: ModelKind,

    /// When to recompute, overriding the settings file
    #[arg(long, value_enum)]
    pub recompute: Option<RecomputeTrigger>,
}

pub fn execute(args: InteractiveArgs, settings: &Settings) -> Result<()> {
    let locale = settings.ui.locale;
    let trigger = args.recompute.unwrap_or(settings.ui.recompute);
    let mut session = Session::new(
        args.model,
        trigger,
        settings.height.model_config()?,
        settings.dryer.model_config(),
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_help(&session, locale);

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(&line) {
            Ok(Command::Set(field, value)) => match session.set(field, value) {
                Ok(Some(outcome)) => print_outcome(&outcome, &session, locale),
                Ok(None) => {}
                Err(err) => eprintln!("{err}"),
            },
            Ok(Command::Submit) => print_outcome(&session.evaluate(), &session, locale),
            Ok(Command::Show) => print_values(&session, locale),
            Ok(Command::Help) => print_help(&session, locale),
            Ok(Command::Quit) => break,
            Err(err) => {
                warn!(%err, "unrecognized input");
                eprintln!("{err}");
            }
        }
    }

    Ok(())
}

fn print_outcome(outcome: &Outcome, session: &Session, locale: Locale) {
    match outcome {
        Outcome::Computed(result) => {
            let hours = session.value(InputField::Hours).unwrap_or(1.0);
            for line in render::result_lines(result, hours, locale) {
                println!("{line}");
            }
        }
        Outcome::Rejected(err) => eprintln!("{}", render::invalid_input(err, locale)),
        Outcome::Incomplete(missing) => {
            let names: Vec<_> = missing
                .iter()
                .map(|field| render::field_label(*field, locale))
                .collect();
            let prefix = match locale {
                Locale::Indonesian => "Belum diisi",
                Locale::English => "Still missing",
            };
            println!("{prefix}: {}", names.join(", "));
        }
    }
}

fn print_values(session: &Session, locale: Locale) {
    for field in session.model().fields() {
        let label = render::field_label(*field, locale);
        match session.value(*field) {
            Some(value) => println!("{label} = {value}"),
            None => println!("{label} = -"),
        }
    }
}

fn print_help(session: &Session, locale: Locale) {
    let keys: Vec<_> = session.model().fields().iter().map(|f| f.key()).collect();
    match locale {
        Locale::Indonesian => {
            println!("Isi data dengan `nama = nilai` ({}).", keys.join(", "));
            println!("Perintah: hitung, tampil, bantuan, keluar");
        }
        Locale::English => {
            println!("Enter data as `name = value` ({}).", keys.join(", "));
            println!("Commands: calc, show, help, quit");
        }
    }
}

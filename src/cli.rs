use crate::render::{print_json, render_progress, render_question, render_result};
use clap::{Args, Parser, Subcommand};
use persona_quiz::config::AppConfig;
use persona_quiz::error::AppError;
use persona_quiz::quiz::{QuizSession, SessionError, TurnOutcome, UndoOutcome};
use persona_quiz::telemetry;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "persona-quiz",
    about = "Take a persona quiz and classify the resulting score sheet",
    version
)]
pub(crate) struct Cli {
    /// Quiz document to load (overrides QUIZ_DOCUMENT)
    #[arg(long, global = true)]
    document: Option<PathBuf>,
    /// Print the final score sheet alongside the result
    #[arg(long, global = true)]
    show_scores: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer the quiz interactively (default command)
    Play,
    /// Answer every question from a comma-separated list of option numbers
    Answer(AnswerArgs),
    /// Classify an explicit score sheet
    Classify(ClassifyArgs),
    /// Load the document and report configuration warnings
    Check,
}

#[derive(Args, Debug)]
struct AnswerArgs {
    /// Zero-based option index per question, e.g. 0,2,1
    #[arg(long, value_delimiter = ',', required = true)]
    choices: Vec<usize>,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// Dimension score as key=value; repeat for each dimension
    #[arg(long = "score", value_parser = parse_score)]
    scores: Vec<(String, i64)>,
}

pub(crate) async fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(document) = cli.document {
        config.quiz.document_path = document;
    }
    if cli.show_scores {
        config.quiz.show_scores = true;
    }

    telemetry::init(&config.telemetry)?;
    info!(
        environment = ?config.environment,
        document = %config.quiz.document_path.display(),
        "starting quiz host"
    );

    let mut session = QuizSession::new();
    session.load_from_path(&config.quiz.document_path).await?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => play(&mut session, config.quiz.show_scores).await,
        Command::Answer(args) => answer(&mut session, args, config.quiz.show_scores),
        Command::Classify(args) => classify(&session, args),
        Command::Check => check(&session),
    }
}

async fn play(session: &mut QuizSession, show_scores: bool) -> Result<(), AppError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let Some(question) = session.current_question()? else {
            break;
        };
        println!();
        println!("{}", render_progress(session.answered(), session.total_questions()));
        print!("{}", render_question(question));
        print!("choose 1-{}, u to undo, q to quit > ", question.options.len());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };

        match line.trim() {
            "q" | "quit" => return Ok(()),
            "u" | "undo" => match session.undo()? {
                UndoOutcome::Reverted(_) => println!("Took back the previous answer."),
                UndoOutcome::NothingToUndo => println!("Nothing to undo."),
            },
            raw => match raw.parse::<usize>() {
                Ok(number) if number >= 1 => match session.select_option(number - 1) {
                    Ok(TurnOutcome::Advanced { .. }) | Ok(TurnOutcome::Completed(_)) => {}
                    Err(SessionError::InvalidOption { available, .. }) => {
                        println!("Pick a number between 1 and {available}.")
                    }
                    Err(err) => return Err(err.into()),
                },
                _ => println!("Type an option number, u or q."),
            },
        }
    }

    let result = session.result()?;
    println!();
    print!("{}", render_result(&result));
    if show_scores {
        if let Some(scores) = session.scores() {
            print_json(scores)?;
        }
    }
    Ok(())
}

fn answer(
    session: &mut QuizSession,
    args: AnswerArgs,
    show_scores: bool,
) -> Result<(), AppError> {
    for choice in args.choices {
        if let TurnOutcome::Completed(_) = session.select_option(choice)? {
            break;
        }
    }

    let result = session.result()?;
    print_json(&result)?;
    if show_scores {
        if let Some(scores) = session.scores() {
            print_json(scores)?;
        }
    }
    Ok(())
}

fn classify(session: &QuizSession, args: ClassifyArgs) -> Result<(), AppError> {
    let (Some(classifier), Some(scores)) = (session.classifier(), session.scores()) else {
        return Err(SessionError::NotReady.into());
    };
    if args.scores.is_empty() {
        return Err(AppError::Usage(
            "provide at least one --score key=value".to_string()
        ));
    }

    let mut sheet = scores.clone();
    for (key, value) in &args.scores {
        if !sheet.set(key, *value) {
            warn!(dimension = %key, "ignoring score for undeclared dimension");
        }
    }

    print_json(&classifier.classify(&sheet))
}

fn check(session: &QuizSession) -> Result<(), AppError> {
    let warnings = session.warnings();
    println!(
        "{} question(s), {} warning(s)",
        session.total_questions(),
        warnings.len()
    );
    for warning in warnings {
        println!("  - {warning}");
    }
    Ok(())
}

fn parse_score(raw: &str) -> Result<(String, i64), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing dimension name in '{raw}'"));
    }
    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|err| format!("invalid score in '{raw}' ({err})"))?;
    Ok((key.to_string(), value))
}

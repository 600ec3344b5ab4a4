//! Terminal front-end: stdin/stdout walk through the four screens.

use std::pin::Pin;
use std::sync::Arc;

use futures::{Stream, StreamExt, stream};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::catalog::{Mentor, QuizQuestion};
use crate::chat::{ChatMessage, ConversationSession, PendingTurn, Role, TurnOutcome};
use crate::error::{GatewayError, SessionError};
use crate::gateway::ResponseGateway;
use crate::journey::{AnswerOutcome, QuizProgress, ScreenController, ScreenKind, TurnResolution};

/// Lines typed by the visitor.
pub type InputStream = Pin<Box<dyn Stream<Item = String> + Send>>;

type TurnResult = (PendingTurn, Result<String, GatewayError>);

/// A parsed line of input, interpreted against the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Enter on the Entry or Introduction screen.
    Continue,
    /// Quiz option, 0-based.
    Choice(usize),
    Back,
    Dismiss,
    ListStarters,
    /// Quick starter, 0-based.
    Starter(usize),
    Say(String),
}

impl Command {
    /// Parse a line for the given screen. `None` means the line means nothing there.
    pub fn parse(line: &str, screen: ScreenKind) -> Option<Command> {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("/quit") {
            return Some(Command::Quit);
        }

        match screen {
            ScreenKind::Entry | ScreenKind::Introduction => Some(Command::Continue),
            ScreenKind::Quiz => parse_choice(trimmed).map(Command::Choice),
            ScreenKind::Conversation => match trimmed.strip_prefix('/') {
                Some(name) => parse_slash(name),
                None => Some(Command::Say(line.to_string())),
            },
        }
    }
}

/// Conversation commands after the leading `/`. Unknown names are refused
/// rather than sent to the mentor.
fn parse_slash(name: &str) -> Option<Command> {
    match name.to_ascii_lowercase().as_str() {
        "back" => Some(Command::Back),
        "dismiss" => Some(Command::Dismiss),
        "starters" => Some(Command::ListStarters),
        other => match other.parse::<usize>() {
            Ok(n) if n >= 1 => Some(Command::Starter(n - 1)),
            _ => None,
        },
    }
}

/// Accept `A`-`D` (any case) or `1`-`9`.
fn parse_choice(input: &str) -> Option<usize> {
    let mut chars = input.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match c {
        'a'..='z' => Some(c as usize - 'a' as usize),
        'A'..='Z' => Some(c as usize - 'A' as usize),
        '1'..='9' => Some(c as usize - '1' as usize),
        _ => None,
    }
}

/// Spawn a reader over stdin and expose its lines as a stream.
pub fn stdin_lines() -> InputStream {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Ok(None) => break, // EOF
                Err(e) => {
                    tracing::error!("Error reading stdin: {}", e);
                    break;
                }
            }
        }
    });

    let stream = stream::unfold(rx, |mut rx| async move { rx.recv().await.map(|line| (line, rx)) });
    Box::pin(stream)
}

/// Whether the loop keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the sanctuary until `/quit` or end of input.
///
/// Gateway calls run on spawned tasks; their results come back through a
/// channel so input stays live while a turn is pending.
pub async fn run(gateway: Arc<dyn ResponseGateway>, mut input: InputStream) -> anyhow::Result<()> {
    let mut controller = ScreenController::new();
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<TurnResult>();

    render_entry();

    loop {
        tokio::select! {
            line = input.next() => {
                let Some(line) = line else { break };
                if handle_line(&mut controller, &line, &gateway, &done_tx) == Flow::Quit {
                    break;
                }
            }
            Some((turn, outcome)) = done_rx.recv() => {
                match controller.resolve_turn(turn, outcome) {
                    TurnResolution::Applied(outcome) => {
                        if let Some(session) = controller.session() {
                            render_outcome(session.mentor(), &outcome);
                        }
                    }
                    TurnResolution::Discarded => {}
                }
                prompt();
            }
        }
    }

    eprintln!("May your path be clear. Farewell.");
    Ok(())
}

fn handle_line(
    controller: &mut ScreenController,
    line: &str,
    gateway: &Arc<dyn ResponseGateway>,
    done_tx: &mpsc::UnboundedSender<TurnResult>,
) -> Flow {
    let Some(command) = Command::parse(line, controller.kind()) else {
        match controller.kind() {
            ScreenKind::Quiz => eprintln!("Choose one of the listed options (A-D)."),
            ScreenKind::Conversation => {
                eprintln!("Unknown command. Known: /back /starters /N /dismiss /quit")
            }
            _ => {}
        }
        prompt();
        return Flow::Continue;
    };

    match command {
        Command::Quit => return Flow::Quit,
        Command::Continue if controller.kind() == ScreenKind::Entry => match controller.start() {
            Ok(progress) => render_question(progress),
            Err(e) => eprintln!("{e}"),
        },
        Command::Continue => match controller.proceed() {
            Ok(session) => render_conversation(session),
            Err(e) => eprintln!("{e}"),
        },
        Command::Choice(index) => match controller.answer(index) {
            Ok(AnswerOutcome::NextQuestion(_)) => {
                if let crate::journey::Screen::Quiz(progress) = controller.screen() {
                    render_question(progress);
                }
            }
            Ok(AnswerOutcome::Matched(mentor)) => render_introduction(&mentor),
            Err(e) => eprintln!("{e}"),
        },
        Command::Back => match controller.back() {
            Ok(()) => render_entry(),
            Err(e) => eprintln!("{e}"),
        },
        Command::Dismiss => {
            if let Some(session) = controller.session_mut() {
                session.dismiss_error();
            }
        }
        Command::ListStarters => {
            if let Some(session) = controller.session() {
                render_starters(session);
            }
        }
        Command::Starter(index) => {
            let starter = controller
                .session()
                .and_then(|s| s.quick_starters().get(index).copied());
            match starter {
                Some(starter) => {
                    println!("you> {}", starter.message);
                    send(controller, starter.message, gateway, done_tx);
                }
                None => eprintln!("No such starter. Type /starters to list them."),
            }
        }
        Command::Say(text) => send(controller, &text, gateway, done_tx),
    }

    prompt();
    Flow::Continue
}

/// Begin a turn and run its gateway call in the background.
fn send(
    controller: &mut ScreenController,
    text: &str,
    gateway: &Arc<dyn ResponseGateway>,
    done_tx: &mpsc::UnboundedSender<TurnResult>,
) {
    let Some(session) = controller.session_mut() else {
        return;
    };
    match session.begin_turn(text) {
        Ok(turn) => {
            eprintln!("⏳ {} is reflecting...", session.mentor().name);
            let gateway = Arc::clone(gateway);
            let done_tx = done_tx.clone();
            tokio::spawn(async move {
                let outcome = turn.dispatch(gateway.as_ref()).await;
                // The loop may already be gone on quit.
                let _ = done_tx.send((turn, outcome));
            });
        }
        Err(SessionError::EmptyMessage) => {}
        Err(e) => eprintln!("{e}"),
    }
}

fn prompt() {
    eprint!("> ");
}

fn render_entry() {
    println!();
    println!("🌿 Wisdom Sanctuary");
    println!("Answer three questions and meet the mentor who walks your path.");
    println!("Press Enter to begin, or type /quit to leave.");
    prompt();
}

fn render_question(progress: &QuizProgress) {
    let Some(question) = progress.current() else {
        return;
    };
    println!();
    println!(
        "Question {} of {} [{:>3.0}%]",
        progress.position(),
        progress.total(),
        progress.fraction() * 100.0
    );
    render_options(question);
}

fn render_options(question: &QuizQuestion) {
    println!("{}", question.prompt);
    for (i, option) in question.options.iter().enumerate() {
        let letter = (b'A' + i as u8) as char;
        println!("  {letter}. {}", option.text);
    }
}

fn render_introduction(mentor: &Mentor) {
    println!();
    println!("Assessment complete! Your wisdom guide is...");
    println!("{} {} — {}", mentor.avatar, mentor.name, mentor.title);
    println!("{} · {}", mentor.culture, mentor.philosophy);
    println!("\"{}\"", mentor.quote);
    println!("{}", mentor.description);
    println!("Specialties: {}", mentor.specialties.join(", "));
    println!("Press Enter to begin your conversation.");
}

fn render_conversation(session: &ConversationSession) {
    let mentor = session.mentor();
    println!();
    println!("{} {} · {}", mentor.avatar, mentor.name, mentor.philosophy);
    println!("(/back to return, /starters for suggestions, /dismiss to clear errors)");
    for message in session.messages() {
        render_message(mentor, message);
    }
    render_starters(session);
}

fn render_starters(session: &ConversationSession) {
    for (i, starter) in session.quick_starters().iter().enumerate() {
        println!("  /{} {}", i + 1, starter.label);
    }
}

fn render_message(mentor: &Mentor, message: &ChatMessage) {
    match message.role {
        Role::User => println!("you> {}", message.content),
        Role::Mentor => println!("\n{} {}: {}\n", mentor.avatar, mentor.name, message.content),
    }
}

fn render_outcome(mentor: &Mentor, outcome: &TurnOutcome) {
    render_message(mentor, outcome.message());
    if let TurnOutcome::Failed { reason, .. } = outcome {
        eprintln!("Connection Error: {reason} (/dismiss to clear)");
    }
}

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::app::actions::{Action, DataPayload, SideEffect};
use crate::app::state::{ActivityTab, AppState, PageContent};
use crate::app::update::{start, update};
use crate::app::view;
use crate::stats::StatsClient;

pub async fn run(state: AppState, client: StatsClient) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, state, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
    client: StatsClient,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    for effect in start(&mut state) {
        spawn_side_effect(effect, &client, &action_tx);
    }

    let mut event_stream = crossterm::event::EventStream::new();
    let mut ticker = tokio::time::interval(tokio::time::Duration::from_secs(1));

    loop {
        terminal.draw(|f| view::render(f, &state))?;

        if state.should_quit {
            break;
        }

        tokio::select! {
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event
                    && let Some(action) = map_event_to_action(&event, &state) {
                        for effect in update(&mut state, action) {
                            spawn_side_effect(effect, &client, &action_tx);
                        }
                    }
            }
            Some(action) = action_rx.recv() => {
                for effect in update(&mut state, action) {
                    spawn_side_effect(effect, &client, &action_tx);
                }
            }
            // Keeps the "updated Xm ago" status current
            _ = ticker.tick() => {
                update(&mut state, Action::Tick);
            }
        }
    }

    Ok(())
}

fn map_event_to_action(event: &Event, state: &AppState) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: event::KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    if *code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    // Date picker captures all input while open
    if state.page.picker.is_some() {
        return match code {
            KeyCode::Esc => Some(Action::PickerCancel),
            KeyCode::Enter => Some(Action::PickerApply),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                Some(Action::PickerSwitchField)
            }
            KeyCode::Backspace => Some(Action::PickerBackspace),
            KeyCode::Char(c) if c.is_ascii_digit() || *c == '-' => Some(Action::PickerInput(*c)),
            _ => None,
        };
    }

    // Error panel: dismiss, go back to the dashboard, or reload
    if state.page.error.is_some() {
        return match code {
            KeyCode::Esc => Some(Action::DismissError),
            KeyCode::Enter | KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => {
                Some(Action::Back)
            }
            KeyCode::Char('r') => Some(Action::Reload),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    let on_member = matches!(state.page.content, PageContent::Member(_));

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Enter | KeyCode::Char('l') => Some(Action::Select),
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Backspace => Some(Action::Back),
        KeyCode::Tab if on_member => Some(Action::NextTab),
        KeyCode::BackTab if on_member => Some(Action::PrevTab),
        KeyCode::Char('1') if on_member => Some(Action::SelectTab(ActivityTab::Commits)),
        KeyCode::Char('2') if on_member => Some(Action::SelectTab(ActivityTab::PullRequests)),
        KeyCode::Char('3') if on_member => Some(Action::SelectTab(ActivityTab::Reviews)),
        KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown if on_member => {
            Some(Action::NextPage)
        }
        KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp if on_member => {
            Some(Action::PrevPage)
        }
        KeyCode::Char('d') => Some(Action::OpenDatePicker),
        KeyCode::Char('r') => Some(Action::Reload),
        KeyCode::Char('o') => Some(Action::OpenInBrowser),
        _ => None,
    }
}

fn spawn_side_effect(
    effect: SideEffect,
    client: &StatsClient,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    match effect {
        SideEffect::FetchMemberPerformance { tag, range } => {
            let client = client.clone();
            let tx = action_tx.clone();

            tokio::spawn(async move {
                debug!(from = %range.from, to = %range.to, seq = tag.seq, "Fetching member performance");

                let action = match client.fetch_member_performance(&range).await {
                    Ok(members) => Action::DataLoaded {
                        tag,
                        payload: DataPayload::MemberPerformance(members),
                    },
                    Err(e) => {
                        error!(error = %e, "Failed to fetch member performance");
                        Action::LoadError {
                            tag,
                            message: e.to_string(),
                        }
                    }
                };
                let _ = tx.send(action);
            });
        }
        SideEffect::FetchMemberActivity {
            tag,
            username,
            range,
        } => {
            let client = client.clone();
            let tx = action_tx.clone();

            tokio::spawn(async move {
                debug!(
                    username = %username,
                    from = %range.from,
                    to = %range.to,
                    seq = tag.seq,
                    "Fetching member activity"
                );

                let action = match client.fetch_member_activity(&username, &range).await {
                    Ok(activity) => Action::DataLoaded {
                        tag,
                        payload: DataPayload::MemberActivity(activity),
                    },
                    Err(e) => {
                        error!(username = %username, error = %e, "Failed to fetch member activity");
                        Action::LoadError {
                            tag,
                            message: e.to_string(),
                        }
                    }
                };
                let _ = tx.send(action);
            });
        }
        SideEffect::OpenUrl(url) => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = crate::util::browser::open_url(&url) {
                    error!(error = %e, "Failed to open URL");
                }
            });
        }
    }
}

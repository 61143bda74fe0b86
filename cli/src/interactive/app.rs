//! Interactive application using iocraft

use super::components::{BeankeeperLogo, NavBar, PageBody, StatusLine};
use super::handle::AppHandle;
use super::text_utils::terminal_size;
use anyhow::Result;
use iocraft::prelude::*;

/// Rows taken by everything except the page body
const CHROME_ROWS: usize = 14;
/// Columns taken by outer and page padding
const CHROME_COLS: usize = 6;

/// Width and height of the page body for the current terminal
fn page_area() -> (usize, usize) {
    let (cols, rows) = terminal_size();
    (
        cols.saturating_sub(CHROME_COLS).max(20),
        rows.saturating_sub(CHROME_ROWS).max(3),
    )
}

#[derive(Default, Props)]
pub struct BeankeeperAppProps {
    pub handle: Option<AppHandle>,
}

/// Main Beankeeper interactive component
#[component]
fn BeankeeperApp(mut hooks: Hooks, props: &BeankeeperAppProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let initial_focus = props
        .handle
        .as_ref()
        .and_then(AppHandle::active_index)
        .unwrap_or(0);
    let focused = hooks.use_state(move || initial_focus);
    let revision = hooks.use_state(|| 0u64);
    let should_exit = hooks.use_state(|| false);

    // Handle terminal events
    hooks.use_terminal_events({
        let handle = props.handle.clone();
        let mut focused = focused;
        let mut revision = revision;
        let mut should_exit = should_exit;
        move |event| {
            let TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            else {
                return;
            };
            if kind == KeyEventKind::Release {
                return;
            }

            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    should_exit.set(true);
                    return;
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    should_exit.set(true);
                    return;
                }
                _ => {}
            }

            let Some(handle) = &handle else {
                return;
            };
            let count = handle.trigger_count();
            let (width, height) = page_area();
            let mut scroll = {
                let mut revision = revision;
                move |delta: i64| {
                    handle.scroll_by(delta, width, height);
                    revision.set(revision.get() + 1);
                }
            };

            match code {
                KeyCode::Right | KeyCode::Tab if count > 0 => {
                    focused.set((focused.get() + 1) % count);
                }
                KeyCode::Left | KeyCode::BackTab if count > 0 => {
                    focused.set((focused.get() + count - 1) % count);
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if handle.activate(focused.get()).is_some() {
                        revision.set(revision.get() + 1);
                    }
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    if handle.activate(index).is_some() {
                        focused.set(index);
                        revision.set(revision.get() + 1);
                    }
                }
                KeyCode::Up => scroll(-1),
                KeyCode::Down => scroll(1),
                KeyCode::PageUp => scroll(-(height as i64)),
                KeyCode::PageDown => scroll(height as i64),
                _ => {}
            }
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let Some(handle) = &props.handle else {
        return element! {
            View(padding: 1) {
                Text(content: "No document loaded", color: Color::Red)
            }
        };
    };

    let (cols, _) = terminal_size();
    let (width, height) = page_area();
    let view = handle.view(width);

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            padding: 1,
        ) {
            View(margin_bottom: 1) {
                BeankeeperLogo(
                    title: view.title.clone(),
                    subtitle: format!("v{}", beankeeper_core::VERSION),
                )
            }
            View(margin_bottom: 1) {
                NavBar(items: view.nav.clone(), focused: focused.get())
            }
            View(height: height as u16, flex_direction: FlexDirection::Column) {
                PageBody(lines: view.lines.clone(), scroll: view.scroll, height: height)
            }
            StatusLine(record: view.status.clone(), width: cols)
        }
    }
}

/// Run the interactive UI until the user quits
pub async fn run_interactive(handle: AppHandle) -> Result<()> {
    tokio::task::spawn_blocking(move || {
        smol::block_on(async move {
            element!(BeankeeperApp(handle: Some(handle)))
                .render_loop()
                .await
        })
    })
    .await??;

    Ok(())
}

use kanal::AsyncSender;
use leksi_types::{AppEvent, SearchDirection};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Turn one input line into an event.
///
/// Lines starting with `:` are commands, anything else is typed text.
pub fn parse_line(line: &str) -> Option<AppEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command) = line.strip_prefix(':') else {
        return (!line.trim().is_empty()).then(|| AppEvent::TextInput(line.to_string()));
    };

    let (name, rest) = command.split_once(' ').unwrap_or((command, ""));
    let rest = rest.trim();
    match name {
        "q" | "quit" => Some(AppEvent::Quit),
        "features" => Some(AppEvent::ListFeatures),
        "toggle" if !rest.is_empty() => Some(AppEvent::ToggleFeature(rest.to_string())),
        "accept" if !rest.is_empty() => Some(AppEvent::AcceptSuggestion(rest.to_string())),
        "lang" if !rest.is_empty() => Some(AppEvent::SwitchLanguage(rest.to_string())),
        "search" | "s" if !rest.is_empty() => {
            // optional leading direction code, e.g. `:search source-no hund`
            let (first, query) = rest.split_once(' ').unwrap_or((rest, ""));
            match SearchDirection::from_code(first) {
                Some(direction) if !query.trim().is_empty() => Some(AppEvent::Search {
                    query: query.trim().to_string(),
                    direction,
                }),
                _ => Some(AppEvent::Search {
                    query: rest.to_string(),
                    direction: SearchDirection::SourceToTarget,
                }),
            }
        }
        _ => {
            tracing::warn!("Unknown command: {}", line);
            None
        }
    }
}

/// Read stdin line by line until EOF, `:quit` or cancellation
pub async fn stdin_reader(cancel: CancellationToken, event_tx: AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Input reader stopping");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("Input closed");
                    event_tx.send(AppEvent::Quit).await?;
                    break;
                };
                if let Some(event) = parse_line(&line) {
                    let quit = matches!(event, AppEvent::Quit);
                    event_tx.send(event).await?;
                    if quit {
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

use crossbeam_channel::Sender;
use lift_common::event::EngineEvent;
use log::{error, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Reads engine events, one JSON object per line, from `source` or from stdin
/// and forwards them to the render loop in arrival order.
pub fn feed_thread(tx: Sender<EngineEvent>, source: Option<PathBuf>) {
    let forwarded = match source {
        Some(path) => match File::open(&path) {
            Ok(file) => {
                info!("Reading engine events from {}", path.display());
                pump(BufReader::new(file), &tx)
            }
            Err(e) => {
                error!("Couldn't open event file {}: {e}", path.display());
                return;
            }
        },
        None => {
            info!("Reading engine events from stdin");
            pump(io::stdin().lock(), &tx)
        }
    };
    info!("Event feed closed after {forwarded} events");
}

/// Returns how many events were forwarded before the reader ran dry or the
/// render loop went away
fn pump<R: BufRead>(reader: R, tx: &Sender<EngineEvent>) -> usize {
    let mut forwarded = 0;
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Event feed read failed: {e}");
                break;
            }
        };
        match EngineEvent::from_line(&line) {
            Ok(Some(event)) => {
                if let Err(e) = tx.send(event) {
                    error!("Frontend could not receive event!: {e}");
                    break;
                }
                forwarded += 1;
            }
            Ok(None) => {}
            Err(e) => warn!("Corrupted event discarded! {e}"),
        }
    }
    forwarded
}

#[cfg(test)]
mod test {
    use super::*;
    use crossbeam_channel::unbounded;
    use lift_common::phase::Phase;
    use std::io::Cursor;

    #[test]
    fn test_pump_keeps_order_and_skips_garbage() {
        let input = concat!(
            "{\"type\":\"transition\",\"phase\":\"break\"}\n",
            "\n",
            "garbage\n",
            "{\"type\":\"inactive\",\"hidden\":false}\n",
            "{\"type\":\"transition\",\"phase\":\"down\"}\n",
        );
        let (tx, rx) = unbounded();
        assert_eq!(pump(Cursor::new(input), &tx), 3);

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                EngineEvent::Transition {
                    phase: Phase::Break,
                    panel: None
                },
                EngineEvent::Inactive { hidden: false },
                EngineEvent::Transition {
                    phase: Phase::Down,
                    panel: None
                },
            ]
        );
    }

    #[test]
    fn test_pump_stops_when_receiver_gone() {
        let (tx, rx) = unbounded();
        drop(rx);
        let input = "{\"type\":\"transition\",\"phase\":\"start\"}\n".repeat(3);
        assert_eq!(pump(Cursor::new(input), &tx), 0);
    }
}

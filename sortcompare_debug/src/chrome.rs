// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Each side becomes a process (`pid` 0 for side A, 1 for side B) and each
//! session generation a thread, so re-triggered sessions stack as separate
//! tracks.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use sortcompare_core::config::Side;

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Host ticks are already microseconds and are written unchanged.
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    let mut named = [false; 2];

    for recorded in decode(bytes) {
        let side = match &recorded {
            RecordedEvent::TraceRecorded(e) => e.side,
            RecordedEvent::SessionStart(e) => e.side,
            RecordedEvent::CueFired(e) => e.side,
            RecordedEvent::CueSkipped(e) => e.side,
            RecordedEvent::SessionEnd(e) => e.side,
        };
        if !named[side.index()] {
            named[side.index()] = true;
            events.push(process_name(side));
        }

        match recorded {
            RecordedEvent::TraceRecorded(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "TraceRecorded",
                    "cat": "Record",
                    "ts": 0,
                    "pid": side.index(),
                    "tid": 0,
                    "s": "p",
                    "args": {
                        "algorithm": e.algorithm.display_name(),
                        "len": e.len,
                        "steps": e.steps,
                        "compares": e.compares,
                        "commits": e.commits,
                    }
                }));
            }
            RecordedEvent::SessionStart(e) => {
                events.push(json!({
                    "ph": "B",
                    "name": e.algorithm.display_name(),
                    "cat": "Session",
                    "ts": e.start.ticks(),
                    "pid": side.index(),
                    "tid": e.generation,
                    "args": {
                        "delay_us": e.delay.ticks(),
                        "cues": e.cues,
                        "retrigger": format!("{:?}", e.retrigger),
                    }
                }));
            }
            RecordedEvent::CueFired(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Cue",
                    "cat": "Playback",
                    "ts": e.at.ticks(),
                    "pid": side.index(),
                    "tid": e.generation,
                    "s": "t",
                    "args": {
                        "index": e.index,
                    }
                }));
            }
            RecordedEvent::CueSkipped(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "StaleCue",
                    "cat": "Playback",
                    "ts": e.at.ticks(),
                    "pid": side.index(),
                    "tid": e.generation,
                    "s": "t",
                    "args": {
                        "index": e.index,
                        "current_generation": e.current_generation,
                    }
                }));
            }
            RecordedEvent::SessionEnd(e) => {
                events.push(json!({
                    "ph": "E",
                    "cat": "Session",
                    "ts": e.at.ticks(),
                    "pid": side.index(),
                    "tid": e.generation,
                    "args": {
                        "superseded": e.superseded,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn process_name(side: Side) -> Value {
    json!({
        "ph": "M",
        "name": "process_name",
        "pid": side.index(),
        "args": {
            "name": format!("side {side}"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use sortcompare_core::config::{Algorithm, RetriggerPolicy};
    use sortcompare_core::time::{Duration, HostTime};
    use sortcompare_core::trace::{
        CueFiredEvent, SessionEndEvent, SessionStartEvent, TraceSink,
    };

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_session_start(&SessionStartEvent {
            side: Side::A,
            algorithm: Algorithm::Quick,
            generation: 1,
            start: HostTime(0),
            delay: Duration::from_millis(10),
            cues: 2,
            retrigger: RetriggerPolicy::Overlap,
        });
        rec.on_cue_fired(&CueFiredEvent {
            side: Side::A,
            generation: 1,
            index: 1,
            at: HostTime(10_000),
        });
        rec.on_session_end(&SessionEndEvent {
            side: Side::A,
            generation: 1,
            at: HostTime(10_000),
            superseded: false,
        });

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 4);

        // Side A is named before its first event.
        assert_eq!(parsed[0]["ph"], "M");
        assert_eq!(parsed[0]["args"]["name"], "side a");

        assert_eq!(parsed[1]["ph"], "B");
        assert_eq!(parsed[1]["name"], "Quick Sort");
        assert_eq!(parsed[1]["tid"], 1);

        assert_eq!(parsed[2]["ph"], "i");
        assert_eq!(parsed[2]["ts"], 10_000);

        assert_eq!(parsed[3]["ph"], "E");
        assert_eq!(parsed[3]["pid"], 0);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}

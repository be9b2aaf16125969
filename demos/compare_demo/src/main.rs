// Copyright 2026 the Sortcompare Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated side-by-side sort playback that exercises the diagnostics
//! pipeline.
//!
//! Usage: `compare_demo [left] [right] [speed] [seed]`, for example
//! `compare_demo bubble merge 11 7`.
//!
//! Generates one random array, records each side's algorithm over it, and
//! replays both traces against in-memory bars on a virtual timer queue.
//! Events go to a [`PrettyPrintSink`] on stdout and a [`RecorderSink`], which
//! is exported as a Chrome trace JSON file at the end.

use std::cell::RefCell;
use std::fs::File;
use std::io::BufWriter;
use std::process::ExitCode;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use sortcompare_core::config::{Algorithm, PlaybackConfig, SessionConfig, Side, SpeedSetting};
use sortcompare_core::generate::{ArrayGenerator, MIN_BAR_HEIGHT};
use sortcompare_core::playback::{PlaybackSession, SessionEpoch};
use sortcompare_core::record::record_traced;
use sortcompare_core::render::Bars;
use sortcompare_core::stats::{Comparison, TraceStats};
use sortcompare_core::time::HostTime;
use sortcompare_core::timer::{TimerHost, VirtualTimers};
use sortcompare_core::trace::{SharedTracer, Tracer};

use sortcompare_debug::Fanout;
use sortcompare_debug::pretty::PrettyPrintSink;
use sortcompare_debug::recorder::RecorderSink;

const BAR_COUNT: usize = 48;
/// Tallest bar on a 720px viewport.
const MAX_BAR_HEIGHT: u32 = 423;

struct Args {
    algorithms: [Algorithm; 2],
    speed: SpeedSetting,
    seed: u64,
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);
    let left = match args.next() {
        Some(s) => s.parse().map_err(|e| format!("left: {e}"))?,
        None => Algorithm::Bubble,
    };
    let right = match args.next() {
        Some(s) => s.parse().map_err(|e| format!("right: {e}"))?,
        None => Algorithm::Merge,
    };
    let speed = match args.next() {
        Some(s) => {
            let slider = s.parse::<u8>().map_err(|e| format!("speed: {e}"))?;
            SpeedSetting::new(slider).map_err(|e| format!("speed: {e}"))?
        }
        None => SpeedSetting::DEFAULT,
    };
    let seed = match args.next() {
        Some(s) => s.parse().map_err(|e| format!("seed: {e}"))?,
        None => 0x5eed,
    };
    Ok(Args {
        algorithms: [left, right],
        speed,
        seed,
    })
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("compare_demo: {message}");
            eprintln!("usage: compare_demo [left] [right] [speed 0..=22] [seed]");
            return ExitCode::from(2);
        }
    };

    // -- sinks -------------------------------------------------------------
    let pretty = Rc::new(RefCell::new(
        PrettyPrintSink::new(Box::new(std::io::stdout())).without_cues(),
    ));
    let recorder = Rc::new(RefCell::new(RecorderSink::new()));
    let fanout = Rc::new(RefCell::new(
        Fanout::new().with(pretty.clone()).with(recorder.clone()),
    ));
    let tracer = SharedTracer::new(fanout.clone());

    // -- input -------------------------------------------------------------
    let generator = match ArrayGenerator::new(BAR_COUNT, MIN_BAR_HEIGHT, MAX_BAR_HEIGHT) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("compare_demo: {e}");
            return ExitCode::FAILURE;
        }
    };
    let pair = generator.generate(&mut StdRng::seed_from_u64(args.seed));

    // -- record and schedule both sides ------------------------------------
    let playback = PlaybackConfig::standard();
    let mut timers = VirtualTimers::new();
    let mut stats = Vec::with_capacity(2);
    let mut sides = Vec::with_capacity(2);

    for side in Side::BOTH {
        let algorithm = args.algorithms[side.index()];
        let values = pair.side(side);
        let config = SessionConfig::with_speed(algorithm, args.speed, side);

        let trace = {
            let mut fanout = fanout.borrow_mut();
            let mut tracer = Tracer::new(&mut *fanout);
            record_traced(algorithm, side, values, &mut tracer)
        };

        let bars = Rc::new(RefCell::new(Bars::new(values)));
        let started = PlaybackSession::start(
            &trace,
            &config,
            &playback,
            &bars,
            &mut timers,
            &SessionEpoch::new(),
            &tracer,
        )
        .and_then(|_| TraceStats::of(&trace, config.delay, &playback));
        match started {
            Ok(s) => stats.push(s),
            Err(e) => {
                eprintln!("compare_demo: {e}");
                return ExitCode::FAILURE;
            }
        }
        sides.push((side, algorithm, bars));
    }

    // -- run ---------------------------------------------------------------
    let fired = timers.run_until_idle();
    println!(
        "Ran {fired} cues in {:.3}ms of virtual time",
        timers
            .now()
            .saturating_duration_since(HostTime::ZERO)
            .as_millis_f64()
    );

    let mut expected = pair.a.clone();
    expected.sort_unstable();
    for (side, algorithm, bars) in &sides {
        let bars = bars.borrow();
        let status = if bars.heights() == expected && bars.highlighted().is_empty() {
            "sorted"
        } else {
            "NOT SORTED"
        };
        println!(
            "side {side}: {algorithm} {status} after {} bar updates",
            bars.update_count()
        );
    }

    let comparison = Comparison::new(stats[0], stats[1]);
    match comparison.leader() {
        Some(side) => println!(
            "{} on side {side} finishes first by {:.3}ms",
            args.algorithms[side.index()],
            comparison.margin().as_millis_f64()
        ),
        None => println!("both sides finish together"),
    }

    // -- export Chrome trace -----------------------------------------------
    let path = "trace.json";
    let file = File::create(path).expect("failed to create trace.json");
    let mut writer = BufWriter::new(file);
    sortcompare_debug::chrome::export(recorder.borrow().as_bytes(), &mut writer)
        .expect("failed to write Chrome trace");

    println!("Wrote {path}");
    ExitCode::SUCCESS
}

/// Basic usage example: feed motion samples, get interval statistics and gestures
use motion_stats::{
    Attitude, IntervalReport, MotionSession, RotationRate, Sample, SessionConfig,
};

fn main() {
    println!("=== Motion Statistics Engine: Basic Example ===\n");

    // 20Hz sampling, reports every second for this demo
    let config = SessionConfig {
        report_interval_ms: 1000,
        ..SessionConfig::default()
    };
    let mut session = MotionSession::new(config);

    let level = Attitude::new(0.0, 0.0, 0.0);
    let rolled = Attitude::new(0.1, 0.9, 0.0);
    let still = RotationRate::new(0.0, 0.0, 0.0);

    let mut samples = Vec::new();

    // Resting on the table (0-1 seconds)
    for i in 0..20u64 {
        let wobble = if i % 2 == 0 { 0.02 } else { -0.02 };
        samples.push(
            Sample::new(i * 50, [wobble, 0.01, -wobble])
                .with_attitude(level)
                .with_rotation_rate(still),
        );
    }

    // Gestures (1-1.2 seconds): parry, thrust, then a rolled slash
    samples.push(Sample::new(1000, [1.3, 0.2, 0.0]).with_attitude(level).with_rotation_rate(still));
    samples.push(Sample::new(1050, [0.1, 1.4, 0.0]).with_attitude(level).with_rotation_rate(still));
    samples.push(
        Sample::new(1100, [0.0, 1.2, 0.3])
            .with_attitude(rolled)
            .with_rotation_rate(RotationRate::new(5.0, 0.0, 0.0)),
    );

    // Picked up (1.2-1.5 seconds)
    for i in 0..6u64 {
        samples.push(
            Sample::new(1150 + i * 50, [-0.05, 0.1, 0.05]).with_attitude(Attitude::new(1.5, 0.0, 0.0)),
        );
    }

    println!("Processing {} samples...", samples.len());

    let mut report_count = 0;
    for sample in &samples {
        let outcome = session.process_sample(sample);
        if outcome.classification.label.is_gesture() {
            println!(
                "  t={}ms: {:?}",
                sample.timestamp_ms, outcome.classification.label
            );
        }
        if let Some(report) = outcome.report {
            report_count += 1;
            print_report(&report, report_count);
        }
    }

    // Flush the final partial interval
    if let Some(report) = session.flush() {
        report_count += 1;
        print_report(&report, report_count);
    }

    let gestures = session.gesture_counts();
    println!("\n=== Summary ===");
    println!("Total reports: {}", report_count);
    println!(
        "Gestures: thrust={} parry={} slash={} (lifted samples: {})",
        gestures.thrust, gestures.parry, gestures.slash, gestures.lifted
    );
    println!("Zero crossings [x, y, z]: {:?}", session.crossing_counts());
}

fn print_report(report: &IntervalReport, num: usize) {
    println!("\n--- Report {} ({} - {}ms) ---", num, report.start_ms, report.end_ms);
    println!("COUNT  X:{} Y:{} Z:{}", report.x.count, report.y.count, report.z.count);
    println!("MIN    X:{:4.2} Y:{:4.2} Z:{:4.2}", report.x.min, report.y.min, report.z.min);
    println!("MAX    X:{:4.2} Y:{:4.2} Z:{:4.2}", report.x.max, report.y.max, report.z.max);
    println!("MEAN   X:{:4.2} Y:{:4.2} Z:{:4.2}", report.x.mean, report.y.mean, report.z.mean);
    println!("MEDIAN X:{:4.2} Y:{:4.2} Z:{:4.2}", report.x.median, report.y.median, report.z.median);
    println!("STDEV  X:{:4.2} Y:{:4.2} Z:{:4.2}", report.x.stdev, report.y.stdev, report.z.stdev);
    println!("Crossings: {:?}", report.crossings);
}

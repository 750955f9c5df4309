use paramtools::{duration_string, matching_silences, Incident, ParamSet, Silence};

fn main() {
    // Two silences: one scoped to specific bots, one alert-wide.
    let mut bots = ParamSet::new();
    bots.add(&[("alertname", "BotMissing"), ("bot", "skia-rpi-064")].into_iter().collect());
    bots.add(&[("alertname", "BotMissing"), ("bot", "skia-rpi-102")].into_iter().collect());

    let silences = vec![
        Silence {
            key: "sil-bots".to_string(),
            param_set: bots,
            active: true,
            ..Default::default()
        },
        Silence {
            key: "sil-alert-wide".to_string(),
            param_set: ParamSet::from_query("alertname=BotMissing").expect("query parses"),
            active: true,
            ..Default::default()
        },
    ];

    let incident = Incident {
        key: "inc-2271".to_string(),
        active: true,
        start: 1_580_500_000,
        last_seen: 1_580_586_400,
        params: [("alertname", "BotMissing"), ("bot", "skia-rpi-064")]
            .into_iter()
            .collect(),
        ..Default::default()
    };

    println!(
        "incident {} firing for {}",
        incident.key,
        duration_string(incident.duration_secs())
    );
    for silence in matching_silences(&silences, &incident.params, false) {
        println!("covered by {} ({})", silence.key, silence.param_set.to_query());
    }
}

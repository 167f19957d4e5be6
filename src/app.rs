use serde::Serialize;

use wx_outlook::aggregate::AggregateSummary;
use wx_outlook::alerts::Alert;
use wx_outlook::outlook::Outlook;

const MISSING: &str = "--";

#[derive(Serialize)]
struct Report<'a> {
    outlook: &'a Outlook,
    summary: &'a AggregateSummary,
    alerts: &'a [Alert],
}

pub fn render_json(
    outlook: &Outlook,
    summary: &AggregateSummary,
    alerts: &[Alert],
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report {
        outlook,
        summary,
        alerts,
    })
}

pub fn render_text(outlook: &Outlook, alerts: &[Alert]) -> String {
    let mut lines = vec![
        format!("{} {} [{}]", outlook.emoji, outlook.headline, outlook.badge.text),
        format!("  {}", outlook.text),
        String::new(),
        "Alerts".to_string(),
    ];

    if alerts.is_empty() {
        lines.push(format!("  {MISSING}"));
    } else {
        for alert in alerts {
            lines.push(format!("  {} {:16} {}", alert.icon, alert.title, alert.detail));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_alert() -> Alert {
        Alert {
            id: "gusty",
            icon: "🌬️",
            title: "Gusty winds".to_string(),
            detail: "Gusts up to 33 mph.".to_string(),
        }
    }

    #[test]
    fn text_lists_alerts_or_placeholder() {
        let outlook = Outlook::no_data();
        let empty = render_text(&outlook, &[]);
        assert!(empty.starts_with("❔ Forecast unavailable [No data]"));
        assert!(empty.ends_with("  --"));

        let listed = render_text(&outlook, &[sample_alert()]);
        assert!(listed.contains("Gusty winds"));
        assert!(listed.contains("Gusts up to 33 mph."));
    }

    #[test]
    fn json_shape() {
        let summary = AggregateSummary {
            hours: 24,
            max_temp: Some(71.0),
            total_precip: 0.25,
            max_uv: 5.0,
            ..Default::default()
        };
        let json = render_json(&Outlook::no_data(), &summary, &[sample_alert()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["outlook"]["badge"]["category"], "no-data");
        assert_eq!(value["outlook"]["headline"], "Forecast unavailable");
        assert_eq!(value["summary"]["maxTemp"], 71.0);
        assert_eq!(value["summary"]["totalPrecip"], 0.25);
        assert_eq!(value["summary"]["maxUV"], 5.0);
        assert!(value["summary"]["minTemp"].is_null());
        assert_eq!(value["alerts"][0]["id"], "gusty");
    }
}

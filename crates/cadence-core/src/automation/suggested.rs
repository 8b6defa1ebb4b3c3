//! Starter automations offered for one-click adoption.

use super::Automation;

/// The built-in starter catalog.
///
/// Ids are consecutive offsets from `base_id` (callers typically pass the
/// current epoch milliseconds) so entries in one session get stable,
/// non-colliding synthetic ids; the server never sees them. "Market
/// Summary" runs on weekdays via a day-of-week range, which the structured
/// editor cannot express -- its cron is submitted verbatim on adoption and
/// its display strings are curated rather than derived.
pub fn suggested_automations(base_id: i64) -> Vec<Automation> {
    vec![
        Automation {
            id: base_id,
            subject: "Weekly Newsletter".to_string(),
            query_to_run: "Compile a message including: 1. A recap of news from last week 2. A reminder to work out and stay hydrated 3. A quote to inspire me for the week ahead".to_string(),
            scheduling_request: String::new(),
            schedule: "9AM every Monday".to_string(),
            crontime: "0 9 * * 1".to_string(),
            next: "Next run at 9AM on Monday".to_string(),
        },
        Automation {
            id: base_id + 1,
            subject: "Daily Bedtime Story".to_string(),
            query_to_run: "Compose a bedtime story that a five-year-old might enjoy. It should not exceed five paragraphs. Appeal to the imagination, but weave in learnings.".to_string(),
            scheduling_request: String::new(),
            schedule: "9PM every night".to_string(),
            crontime: "0 21 * * *".to_string(),
            next: "Next run at 9PM today".to_string(),
        },
        Automation {
            id: base_id + 2,
            subject: "Front Page of Hacker News".to_string(),
            query_to_run: "Summarize the top 5 posts from https://news.ycombinator.com/best and share them with me, including links".to_string(),
            scheduling_request: String::new(),
            schedule: "9PM on every Wednesday".to_string(),
            crontime: "0 21 * * 3".to_string(),
            next: "Next run at 9PM on Wednesday".to_string(),
        },
        Automation {
            id: base_id + 3,
            subject: "Market Summary".to_string(),
            query_to_run: "Get the market summary for today and share it with me. Focus on tech stocks and the S&P 500.".to_string(),
            scheduling_request: String::new(),
            schedule: "9AM on every weekday".to_string(),
            crontime: "0 9 * * 1-5".to_string(),
            next: "Next run at 9AM on Monday".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_four_unique_subjects() {
        let catalog = suggested_automations(1000);
        assert_eq!(catalog.len(), 4);
        let mut subjects: Vec<&str> = catalog.iter().map(|a| a.subject.as_str()).collect();
        subjects.sort();
        subjects.dedup();
        assert_eq!(subjects.len(), 4);
    }

    #[test]
    fn ids_offset_from_base() {
        let catalog = suggested_automations(500);
        let ids: Vec<i64> = catalog.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![500, 501, 502, 503]);
    }
}

use chrono::Utc;
use clap::Subcommand;

use cadence_core::{
    describe_cron, describe_next_run, weekday_from_name, Automation, AutomationFields, Config,
    Frequency, Recurrence, TimeOfDay,
};

#[derive(Subcommand)]
pub enum AutomationAction {
    /// List automations persisted on the server
    List {
        /// Print raw JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Create a new automation
    Create {
        /// What the automation should do
        query: String,
        /// Email subject for the delivered result
        #[arg(long)]
        subject: Option<String>,
        /// Frequency: day, week or month
        #[arg(long)]
        every: String,
        /// Weekday for weekly automations (e.g. Monday)
        #[arg(long)]
        on: Option<String>,
        /// Day of month for monthly automations (1-31)
        #[arg(long)]
        day: Option<u8>,
        /// Time of day, a quarter-hour 12-hour token (e.g. "9:00 AM")
        #[arg(long, default_value = "12:00 PM")]
        at: String,
    },
    /// Update an existing automation
    Edit {
        id: i64,
        /// Replacement query
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        subject: Option<String>,
        /// New frequency: day, week or month
        #[arg(long)]
        every: Option<String>,
        /// New weekday for weekly automations
        #[arg(long)]
        on: Option<String>,
        /// New day of month for monthly automations
        #[arg(long)]
        day: Option<u8>,
        /// New time of day
        #[arg(long)]
        at: Option<String>,
    },
    /// Delete an automation
    Delete { id: i64 },
    /// Trigger an immediate preview run
    Trigger { id: i64 },
}

pub async fn run(action: AutomationAction) -> Result<(), Box<dyn std::error::Error>> {
    let client = super::client()?;
    match action {
        AutomationAction::List { json } => {
            let automations = client.list().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&automations)?);
            } else if automations.is_empty() {
                println!("no automations yet");
            } else {
                for automation in &automations {
                    print_automation(automation);
                }
            }
        }
        AutomationAction::Create {
            query,
            subject,
            every,
            on,
            day,
            at,
        } => {
            let recurrence = build_recurrence(&every, on.as_deref(), day, &at)?;
            let config = Config::load_or_default();
            let fields = AutomationFields {
                query_to_run: query,
                subject,
                crontime: recurrence.to_cron(),
                location: config.location,
            };
            tracing::debug!(crontime = %fields.crontime, "creating automation");
            let created = client.create(&fields).await?;
            println!("created automation {} ({})", created.id, recurrence.describe());
        }
        AutomationAction::Edit {
            id,
            query,
            subject,
            every,
            on,
            day,
            at,
        } => {
            let automations = client.list().await?;
            let existing = automations
                .into_iter()
                .find(|a| a.id == id)
                .ok_or_else(|| format!("no automation with id {id}"))?;

            // Decode the stored schedule into the editor's structured
            // form; unsupported expressions surface here rather than
            // being silently rewritten.
            let current = Recurrence::from_cron(&existing.crontime)?;

            let time = match at {
                Some(token) => TimeOfDay::from_slot(&token)?,
                None => current.time(),
            };
            let frequency = match every {
                Some(value) => value.parse()?,
                None => current.frequency(),
            };
            let recurrence = match frequency {
                Frequency::Daily => Recurrence::daily(time),
                Frequency::Weekly => {
                    let weekday = match on.as_deref() {
                        Some(name) => parse_weekday(name)?,
                        None => match current {
                            Recurrence::Weekly { weekday, .. } => weekday,
                            _ => return Err("weekly automations need --on <weekday>".into()),
                        },
                    };
                    Recurrence::weekly(time, weekday)
                }
                Frequency::Monthly => {
                    let day = match day {
                        Some(day) => day,
                        None => match current {
                            Recurrence::Monthly { day, .. } => day,
                            _ => return Err("monthly automations need --day <1-31>".into()),
                        },
                    };
                    Recurrence::monthly(time, day)?
                }
            };

            let config = Config::load_or_default();
            let fields = AutomationFields {
                query_to_run: query.unwrap_or(existing.query_to_run),
                subject: subject.or(if existing.subject.is_empty() {
                    None
                } else {
                    Some(existing.subject)
                }),
                crontime: recurrence.to_cron(),
                location: config.location,
            };
            tracing::debug!(id, crontime = %fields.crontime, "updating automation");
            let updated = client.update(id, &fields).await?;
            println!("updated automation {} ({})", updated.id, recurrence.describe());
        }
        AutomationAction::Delete { id } => {
            tracing::debug!(id, "deleting automation");
            client.delete(id).await?;
            println!("deleted automation {id}");
        }
        AutomationAction::Trigger { id } => {
            client.trigger(id).await?;
            println!("triggered automation {id}; the result is on its way");
        }
    }
    Ok(())
}

pub(crate) fn print_automation(automation: &Automation) {
    let schedule = describe_cron(&automation.crontime)
        .unwrap_or_else(|_| automation.schedule.clone());
    let next = describe_next_run(&automation.crontime, Utc::now())
        .unwrap_or_else(|_| automation.next.clone());
    println!("{:>6}  {}", automation.id, automation.subject);
    println!("        runs {schedule} -- {next}");
    println!("        {}", automation.query_to_run);
}

pub(crate) fn build_recurrence(
    every: &str,
    on: Option<&str>,
    day: Option<u8>,
    at: &str,
) -> Result<Recurrence, Box<dyn std::error::Error>> {
    let frequency: Frequency = every.parse()?;
    let time = TimeOfDay::from_slot(at)?;
    match frequency {
        Frequency::Daily => Ok(Recurrence::daily(time)),
        Frequency::Weekly => {
            let name = on.ok_or("weekly automations need --on <weekday>")?;
            Ok(Recurrence::weekly(time, parse_weekday(name)?))
        }
        Frequency::Monthly => {
            let day = day.ok_or("monthly automations need --day <1-31>")?;
            Ok(Recurrence::monthly(time, day)?)
        }
    }
}

fn parse_weekday(name: &str) -> Result<chrono::Weekday, Box<dyn std::error::Error>> {
    weekday_from_name(name).ok_or_else(|| format!("unknown weekday: {name}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn build_recurrence_for_each_frequency() {
        let daily = build_recurrence("day", None, None, "9:00 AM").unwrap();
        assert_eq!(daily.to_cron(), "0 9 * * *");

        let weekly = build_recurrence("week", Some("Wednesday"), None, "9:00 PM").unwrap();
        assert_eq!(weekly, Recurrence::weekly(TimeOfDay::from_slot("9:00 PM").unwrap(), Weekday::Wed));

        let monthly = build_recurrence("month", None, Some(15), "8:30 AM").unwrap();
        assert_eq!(monthly.to_cron(), "30 8 15 * *");
    }

    #[test]
    fn build_recurrence_requires_day_selector() {
        assert!(build_recurrence("week", None, None, "9:00 AM").is_err());
        assert!(build_recurrence("month", None, None, "9:00 AM").is_err());
    }

    #[test]
    fn build_recurrence_rejects_off_catalog_times() {
        assert!(build_recurrence("day", None, None, "9:07 AM").is_err());
    }
}

use std::fmt::Write;
use std::io;

use calm_io::{stderrln, stdoutln};
use chrono::{DateTime, Utc};
use comfy_table::Table;
use console::style;
use lector_client::operations::digest::PersonalizedDigest;
use lector_client::operations::reading_history::{
    aggregates::ReadingHistoryAggregates, suggestions::SearchSuggestion, HistoryEntryKey,
    ReadingHistoryEntry,
};
use lector_client::operations::user::{
    my_reading_rank::MyReadingRank, profile::UserProfile, reading_rank::ReadingRank,
    referral::ReferralCampaign, stats::UserStats, tooltip::UserTooltip, update::UpdatedProfile,
};
use lector_client::shared::{Cursor, UserShortInfo};
use serde::Serialize;
use serde_json::{Value, json};

use crate::LectorError;
use crate::utils::table;

/// LectorOutput defines all of the different types of data that are printed
/// to `stdout`. Every one of Lector's commands should return `LectorResult<LectorOutput>`
/// If the command needs to output some type of data, it should be structured
/// in this enum, and its print logic should be handled in `LectorOutput::get_stdout`
///
/// Commands that only acknowledge something describe it on `stderr`, so
/// piping `stdout` always yields data.
#[derive(Clone, PartialEq, Debug)]
pub enum LectorOutput {
    HistoryPage {
        entries: Vec<ReadingHistoryEntry>,
        next_cursor: Option<Cursor>,
    },
    SearchSuggestions(Vec<SearchSuggestion>),
    ReadingAggregates(ReadingHistoryAggregates),
    EntryHidden(HistoryEntryKey),
    UserProfile(UserProfile),
    UserStats(UserStats),
    ReadingRank(ReadingRank),
    MyReadingRank(MyReadingRank),
    UserTooltip(UserTooltip),
    ReferringUser(UserShortInfo),
    UsernameSuggestion(String),
    ReferralCampaign(ReferralCampaign),
    ProfileUpdated(UpdatedProfile),
    Digest(Option<PersonalizedDigest>),
    DigestUnsubscribed,
}

impl LectorOutput {
    pub fn get_stdout(&self) -> Option<String> {
        match self {
            LectorOutput::HistoryPage { entries, .. } => {
                if entries.is_empty() {
                    None
                } else {
                    Some(history_table(entries).to_string())
                }
            }
            LectorOutput::SearchSuggestions(hits) => {
                let mut titles = String::new();
                for hit in hits {
                    let _ = writeln!(titles, "{}", hit.title);
                }
                Some(titles.trim_end().to_string())
            }
            LectorOutput::ReadingAggregates(aggregates) => Some(aggregates_tables(aggregates)),
            LectorOutput::EntryHidden(_) | LectorOutput::DigestUnsubscribed => None,
            LectorOutput::UserProfile(profile) => {
                let table = key_value_table(vec![
                    ("Id", profile.id.clone()),
                    ("Name", or_na(&profile.name)),
                    ("Username", or_na(&profile.username)),
                    ("Bio", or_na(&profile.bio)),
                    ("Reputation", or_na(&profile.reputation)),
                    ("Timezone", or_na(&profile.timezone)),
                    ("Twitter", or_na(&profile.twitter)),
                    ("GitHub", or_na(&profile.github)),
                    ("Hashnode", or_na(&profile.hashnode)),
                    ("Portfolio", or_na(&profile.portfolio)),
                    ("Member since", format_time(profile.created_at)),
                    ("Profile", profile.permalink.clone()),
                ]);
                Some(table.to_string())
            }
            LectorOutput::UserStats(stats) => {
                let table = key_value_table(vec![
                    ("Posts", stats.num_posts.to_string()),
                    ("Post views", stats.num_post_views.to_string()),
                    ("Post upvotes", stats.num_post_upvotes.to_string()),
                    ("Comments", stats.num_comments.to_string()),
                    ("Comment upvotes", stats.num_comment_upvotes.to_string()),
                ]);
                Some(table.to_string())
            }
            LectorOutput::ReadingRank(rank) => Some(rank.current_rank.to_string()),
            LectorOutput::MyReadingRank(rank) => {
                let mut output = key_value_table(vec![
                    ("Current rank", rank.current_rank.to_string()),
                    ("Rank last week", rank.rank_last_week.to_string()),
                    ("Progress this week", rank.progress_this_week.to_string()),
                    ("Read today", rank.read_today.to_string()),
                    ("Last read", format_time(rank.last_read_time)),
                ])
                .to_string();
                if !rank.tags.is_empty() {
                    let mut tags = table::get_table();
                    tags.set_header(vec!["Tag", "Reading days", "Share"]);
                    for tag in &rank.tags {
                        tags.add_row(vec![
                            tag.tag.clone(),
                            tag.reading_days.to_string(),
                            format_percentage(tag.percentage),
                        ]);
                    }
                    let _ = write!(output, "\n{tags}");
                }
                Some(output)
            }
            LectorOutput::UserTooltip(tooltip) => {
                let tags = tooltip
                    .tags
                    .iter()
                    .map(|tag| tag.value.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                let mut rows = vec![
                    ("Current rank", tooltip.rank.current_rank.to_string()),
                    ("Top tags", if tags.is_empty() { "N/A".to_string() } else { tags }),
                ];
                if let Some(user) = &tooltip.user {
                    rows.push(("Name", or_na(&user.name)));
                    rows.push(("Username", or_na(&user.username)));
                    rows.push(("Profile", user.permalink.clone()));
                }
                Some(key_value_table(rows).to_string())
            }
            LectorOutput::ReferringUser(user) => {
                let table = key_value_table(vec![
                    ("Id", user.id.clone()),
                    ("Name", or_na(&user.name)),
                    ("Username", or_na(&user.username)),
                    ("Bio", or_na(&user.bio)),
                    ("Reputation", or_na(&user.reputation)),
                    ("Profile", user.permalink.clone()),
                ]);
                Some(table.to_string())
            }
            LectorOutput::UsernameSuggestion(username) => Some(username.clone()),
            LectorOutput::ReferralCampaign(campaign) => {
                let limit = campaign
                    .referral_count_limit
                    .map_or_else(|| "unlimited".to_string(), |limit| limit.to_string());
                let table = key_value_table(vec![
                    ("Referred users", campaign.referred_users_count.to_string()),
                    ("Limit", limit),
                    ("Token", or_na(&campaign.referral_token)),
                    ("Link", campaign.url.clone()),
                ]);
                Some(table.to_string())
            }
            LectorOutput::ProfileUpdated(profile) => {
                let table = key_value_table(vec![
                    ("Id", profile.id.clone()),
                    ("Name", or_na(&profile.name)),
                    ("Username", or_na(&profile.username)),
                    ("Bio", or_na(&profile.bio)),
                    ("Timezone", or_na(&profile.timezone)),
                    ("Twitter", or_na(&profile.twitter)),
                    ("GitHub", or_na(&profile.github)),
                    ("Hashnode", or_na(&profile.hashnode)),
                    ("Profile", profile.permalink.clone()),
                ]);
                Some(table.to_string())
            }
            LectorOutput::Digest(Some(digest)) => {
                let table = key_value_table(vec![
                    ("Day", weekday_name(digest.preferred_day)),
                    ("Hour", format!("{:02}:00", digest.preferred_hour)),
                    ("Timezone", digest.preferred_timezone.clone()),
                ]);
                Some(table.to_string())
            }
            LectorOutput::Digest(None) => None,
        }
    }

    pub fn get_stderr(&self) -> Option<String> {
        match self {
            LectorOutput::HistoryPage {
                entries,
                next_cursor,
            } => {
                let mut descriptor = if entries.is_empty() {
                    "No reading history found.".to_string()
                } else {
                    format!("{} entries", entries.len())
                };
                if let Some(cursor) = next_cursor {
                    let _ = write!(
                        descriptor,
                        "\nMore entries are available. Continue with {}",
                        style(format!("--after {cursor}")).cyan()
                    );
                }
                Some(descriptor)
            }
            LectorOutput::SearchSuggestions(hits) if hits.is_empty() => {
                Some("No suggestions found.".to_string())
            }
            LectorOutput::EntryHidden(key) => Some(format!(
                "Hid post {} read at {} from the reading history.",
                style(&key.post_id).cyan(),
                key.timestamp
            )),
            LectorOutput::ProfileUpdated(_) => Some("Profile updated.".to_string()),
            LectorOutput::Digest(None) => {
                Some("Not subscribed to the personalized digest.".to_string())
            }
            LectorOutput::DigestUnsubscribed => {
                Some("Unsubscribed from the personalized digest.".to_string())
            }
            _ => None,
        }
    }

    pub fn get_json(&self) -> Value {
        match self {
            LectorOutput::HistoryPage {
                entries,
                next_cursor,
            } => json!({ "entries": entries, "next_cursor": next_cursor }),
            LectorOutput::SearchSuggestions(hits) => json!({ "hits": hits }),
            LectorOutput::ReadingAggregates(aggregates) => json!(aggregates),
            LectorOutput::EntryHidden(key) => json!({ "hidden": key }),
            LectorOutput::UserProfile(profile) => json!({ "user": profile }),
            LectorOutput::UserStats(stats) => json!({ "stats": stats }),
            LectorOutput::ReadingRank(rank) => json!({ "rank": rank }),
            LectorOutput::MyReadingRank(rank) => json!({ "rank": rank }),
            LectorOutput::UserTooltip(tooltip) => json!(tooltip),
            LectorOutput::ReferringUser(user) => json!({ "user": user }),
            LectorOutput::UsernameSuggestion(username) => json!({ "username": username }),
            LectorOutput::ReferralCampaign(campaign) => json!({ "campaign": campaign }),
            LectorOutput::ProfileUpdated(profile) => json!({ "user": profile }),
            LectorOutput::Digest(digest) => json!({ "digest": digest }),
            LectorOutput::DigestUnsubscribed => json!({}),
        }
    }

    pub fn print(&self) -> io::Result<()> {
        if let Some(descriptor) = self.get_stderr() {
            stderrln!("{}", descriptor)?;
        }
        if let Some(stdout) = self.get_stdout() {
            stdoutln!("{}", stdout)?;
        }
        Ok(())
    }
}

fn history_table(entries: &[ReadingHistoryEntry]) -> Table {
    let mut table = table::get_table();
    table.set_header(vec!["Read at", "Title", "Post id", "Timestamp key", "Link"]);
    for entry in entries {
        table.add_row(vec![
            entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            entry.post.display_title().unwrap_or("N/A").to_string(),
            entry.post.id.clone(),
            entry.timestamp_db.clone(),
            entry.post.comments_permalink.clone(),
        ]);
    }
    table
}

fn aggregates_tables(aggregates: &ReadingHistoryAggregates) -> String {
    let mut reads = table::get_table();
    reads.set_header(vec!["Day", "Reads"]);
    for day in &aggregates.read_history {
        reads.add_row(vec![day.date.to_string(), day.reads.to_string()]);
    }

    let mut ranks = table::get_table();
    ranks.set_header(vec!["Rank", "Weeks"]);
    for sample in &aggregates.rank_history {
        ranks.add_row(vec![sample.rank.to_string(), sample.count.to_string()]);
    }

    let mut tags = table::get_table();
    tags.set_header(vec!["Tag", "Reads", "Share"]);
    for tag in &aggregates.most_read_tags {
        tags.add_row(vec![
            tag.value.clone(),
            tag.count.to_string(),
            format_percentage(tag.percentage),
        ]);
    }

    format!("{reads}\n{ranks}\n{tags}")
}

fn key_value_table(rows: Vec<(&str, String)>) -> Table {
    let mut table = table::get_table();
    for (key, value) in rows {
        table.add_row(vec![key.to_string(), value]);
    }
    table
}

fn or_na<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "N/A".to_string(), ToString::to_string)
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map_or_else(
        || "N/A".to_string(),
        |time| time.format("%Y-%m-%d %H:%M:%S %Z").to_string(),
    )
}

/// Shares come over the wire as fractions of one
fn format_percentage(percentage: Option<f64>) -> String {
    percentage.map_or_else(|| "N/A".to_string(), |p| format!("{:.1}%", p * 100.0))
}

fn weekday_name(day: i64) -> String {
    const DAYS: [&str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];
    usize::try_from(day)
        .ok()
        .and_then(|day| DAYS.get(day))
        .map_or_else(|| day.to_string(), |name| name.to_string())
}

/// The document printed by `--format json`, for both successes and errors
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JsonOutput {
    json_version: JsonVersion,
    data: JsonData,
    error: Value,
}

impl JsonOutput {
    pub fn print(&self) -> io::Result<()> {
        stdoutln!("{}", json!(self))
    }

    pub const fn is_success(&self) -> bool {
        self.data.success
    }
}

impl From<LectorOutput> for JsonOutput {
    fn from(output: LectorOutput) -> Self {
        Self {
            json_version: JsonVersion::default(),
            data: JsonData::success(output.get_json()),
            error: Value::Null,
        }
    }
}

impl From<LectorError> for JsonOutput {
    fn from(error: LectorError) -> Self {
        Self {
            json_version: JsonVersion::default(),
            data: JsonData::failure(),
            error: error.get_json(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
struct JsonData {
    #[serde(flatten)]
    inner: Value,
    success: bool,
}

impl JsonData {
    const fn success(inner: Value) -> Self {
        Self {
            inner,
            success: true,
        }
    }

    fn failure() -> Self {
        Self {
            inner: json!({}),
            success: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub enum JsonVersion {
    #[default]
    #[serde(rename = "1")]
    One,
}

//! `/rate`: counts how many upgrade rolls went into each substat of an artifact.
//!
//! The proc search can be slow for large values, so the command defers its
//! response and runs the search on the blocking thread pool.

use std::sync::Arc;

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateAutocompleteResponse, CreateCommand,
    CreateCommandOption, CreateInteractionResponse, CreateInteractionResponseFollowup, ResolvedOption, ResolvedValue,
};

use crate::{
    error::AppError,
    model::artifact::{StatLine, SubstatTable, PERCENT_MODE},
    service::artifact::{ArtifactService, RATED_STAT_COUNT},
    state::BotState,
};

pub const NAME: &str = "rate";

/// Discord shows at most 25 autocomplete choices.
const MAX_CHOICES: usize = 25;

const UNRATED_REPLY: &str =
    "Could not rate this artifact. Check that it is level 20 and the substats are spelled right.";

pub fn register() -> CreateCommand {
    let mut command = CreateCommand::new(NAME)
        .description("Rate an artifact by hand")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "lvl", "Artifact level")
                .required(true),
        );

    for slot in 1..=RATED_STAT_COUNT {
        command = command
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    format!("proc{}", slot),
                    format!("Substat {}", slot),
                )
                .required(true)
                .set_autocomplete(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Number,
                    format!("proc{}_v", slot),
                    format!("Value of substat {}", slot),
                )
                .required(true),
            );
    }

    command
}

pub async fn run(state: &BotState, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let request = RateRequest::from_options(&command.data.options());

    command.defer(ctx).await?;

    let table = Arc::clone(&state.substats);
    let evaluator = state.evaluator;

    let text = tokio::task::spawn_blocking(move || {
        let (level, lines) = request.stat_lines(&table);
        ArtifactService::new(&table, &evaluator).parse_artifact_info(level, &lines)
    })
    .await?;

    let text = if text.is_empty() {
        UNRATED_REPLY.to_string()
    } else {
        text
    };

    command
        .create_followup(ctx, CreateInteractionResponseFollowup::new().content(text))
        .await?;

    Ok(())
}

pub async fn autocomplete(
    state: &BotState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let current = interaction
        .data
        .autocomplete()
        .map(|option| option.value)
        .unwrap_or_default();

    let response = autocomplete_choices(&state.substats, current)
        .into_iter()
        .fold(CreateAutocompleteResponse::new(), |response, name| {
            response.add_string_choice(name, name)
        });

    interaction
        .create_response(ctx, CreateInteractionResponse::Autocomplete(response))
        .await?;

    Ok(())
}

/// Stat names starting with what the user typed so far, ignoring case.
pub fn autocomplete_choices<'a>(table: &'a SubstatTable, current: &str) -> Vec<&'a str> {
    let current = current.to_lowercase();

    table
        .stat_names()
        .filter(|name| name.to_lowercase().starts_with(&current))
        .take(MAX_CHOICES)
        .collect()
}

/// Options of one `/rate` invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateRequest {
    pub level: i64,
    pub stats: [Option<String>; RATED_STAT_COUNT],
    pub values: [Option<f64>; RATED_STAT_COUNT],
}

impl RateRequest {
    pub fn from_options(options: &[ResolvedOption]) -> Self {
        let mut request = Self::default();

        for option in options {
            match &option.value {
                ResolvedValue::Integer(level) if option.name == "lvl" => request.level = *level,
                ResolvedValue::String(stat) => request.set_stat(option.name, stat),
                ResolvedValue::Number(value) => request.set_value(option.name, *value),
                _ => {}
            }
        }

        request
    }

    /// Stores the stat name of a `procN` option.
    pub fn set_stat(&mut self, option: &str, stat: &str) {
        if let Some(index) = slot_index(option) {
            self.stats[index] = Some(stat.trim().to_string());
        }
    }

    /// Stores the value of a `procN_v` option.
    pub fn set_value(&mut self, option: &str, value: f64) {
        if let Some(index) = option.strip_suffix("_v").and_then(slot_index) {
            self.values[index] = Some(value);
        }
    }

    /// The level and one line per complete stat/value pair.
    ///
    /// Each stat is rated in its preferred mode; a stat missing from the table
    /// keeps the percent mode so rating reports it as unknown.
    pub fn stat_lines(&self, table: &SubstatTable) -> (i64, Vec<StatLine>) {
        let lines = self
            .stats
            .iter()
            .zip(self.values.iter())
            .filter_map(|(stat, value)| {
                let (stat, value) = (stat.as_ref()?, (*value)?);
                let mode = table.preferred_mode(stat).unwrap_or(PERCENT_MODE);
                Some(StatLine::new(stat.as_str(), mode, value))
            })
            .collect();

        (self.level, lines)
    }
}

/// `"proc3"` -> `Some(2)`.
fn slot_index(option: &str) -> Option<usize> {
    let slot: usize = option.strip_prefix("proc")?.parse().ok()?;
    (1..=RATED_STAT_COUNT).contains(&slot).then(|| slot - 1)
}

#[cfg(test)]
mod tests {
    use test_utils::fixture;

    use super::*;
    use crate::model::artifact::RawSubstatTable;

    fn table() -> SubstatTable {
        let raw: RawSubstatTable = serde_json::from_value(fixture::substat::table()).unwrap();
        SubstatTable::from_raw(raw).unwrap()
    }

    fn request(stats: [(&str, f64); 4]) -> RateRequest {
        let mut request = RateRequest {
            level: 20,
            ..Default::default()
        };
        for (i, (stat, value)) in stats.iter().enumerate() {
            request.set_stat(&format!("proc{}", i + 1), stat);
            request.set_value(&format!("proc{}_v", i + 1), *value);
        }
        request
    }

    #[test]
    fn maps_option_names_to_slots() {
        assert_eq!(slot_index("proc1"), Some(0));
        assert_eq!(slot_index("proc4"), Some(3));
        assert_eq!(slot_index("proc5"), None);
        assert_eq!(slot_index("proc0"), None);
        assert_eq!(slot_index("lvl"), None);
    }

    #[test]
    fn builds_lines_in_preferred_mode() {
        let table = table();
        let request = request([
            ("crit_rate", 7.0),
            ("elemental_mastery", 23.0),
            ("atk", 5.8),
            ("crit_dmg", 14.0),
        ]);

        let (level, lines) = request.stat_lines(&table);

        assert_eq!(level, 20);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], StatLine::new("crit_rate", "percent", 7.0));
        assert_eq!(lines[1].mode, table.preferred_mode("elemental_mastery").unwrap());
        assert_eq!(lines[2].mode, "percent");
    }

    #[test]
    fn incomplete_pairs_are_dropped() {
        let table = table();
        let mut request = request([
            ("crit_rate", 7.0),
            ("crit_dmg", 14.0),
            ("atk", 5.8),
            ("hp", 5.8),
        ]);
        request.values[3] = None;

        let (_, lines) = request.stat_lines(&table);

        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn autocomplete_filters_by_prefix() {
        let table = table();

        assert_eq!(autocomplete_choices(&table, "CRIT"), vec!["crit_dmg", "crit_rate"]);
        assert_eq!(autocomplete_choices(&table, "").len(), table.len());
        assert!(autocomplete_choices(&table, "xyz").is_empty());
    }
}

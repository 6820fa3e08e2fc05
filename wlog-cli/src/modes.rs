use crate::cli::Cli;
use crate::render::Renderer;
use anyhow::{Context, Result, anyhow};
use chrono::Local;
use std::str::FromStr;
use wlog_core::render::format_timestamp;
use wlog_core::{ExportFormat, Journal, JournalEntry, Mood, WeatherObservation};

pub enum CliModeResult {
    Finish,
    NothingToDo,
}

/// Saves a new entry when the weather flags are present.
pub fn write_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    let (Some(temp), Some(description)) = (cli.temp, cli.description.as_deref()) else {
        return Ok(CliModeResult::NothingToDo);
    };

    let mood = match cli.mood.as_deref() {
        Some(label) => Some(
            Mood::from_str(label)
                .map_err(|_| anyhow!("unknown mood {label:?}; run --moods for the options"))?,
        ),
        None => None,
    };
    let observation = WeatherObservation {
        city: cli
            .city
            .clone()
            .unwrap_or_else(|| journal.config.default_city.clone()),
        temperature: temp,
        description: description.to_string(),
        category: cli.category.clone().unwrap_or_default(),
    };
    let entry = JournalEntry::from_observation(
        &observation,
        mood,
        cli.notes.clone().unwrap_or_default(),
        Local::now().naive_local(),
    );

    journal.save_entry(&entry).context("saving journal entry")?;
    renderer.print_saved(&observation, &entry);
    Ok(CliModeResult::Finish)
}

/// Runs every requested read-side query, in a stable order.
pub fn read_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    let mut handled = false;

    if let Some(limit) = cli.recent {
        let limit = limit.unwrap_or(journal.config.recent_limit);
        renderer.print_blocks(&journal.recent_entries(limit));
        handled = true;
    }
    if let Some(query) = cli.search.as_deref() {
        let result = journal.search_entries(query);
        if result.blocks.is_empty() {
            renderer.print_info(&format!("No entries matching {query:?}."));
            renderer.print_query_errors(&result.errors);
        } else {
            renderer.print_blocks(&result);
        }
        handled = true;
    }
    if cli.stats {
        let mut stats: Vec<_> = journal.mood_statistics().into_iter().collect();
        stats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        for (mood, count) in stats {
            renderer.print_info(&format!("{mood}: {count}"));
        }
        handled = true;
    }
    if cli.correlation {
        let table = journal.weather_mood_correlation();
        let mut descriptions: Vec<_> = table.keys().collect();
        descriptions.sort();
        for description in descriptions {
            let mut moods: Vec<_> = table[description].iter().collect();
            moods.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            let counts: Vec<String> = moods
                .into_iter()
                .map(|(mood, count)| format!("{mood} {count}"))
                .collect();
            renderer.print_info(&format!("{description}: {}", counts.join(", ")));
        }
        handled = true;
    }
    if cli.range {
        let range = journal.date_range();
        match (range.start, range.end) {
            (Some(start), Some(end)) => renderer.print_info(&format!(
                "{} .. {}",
                format_timestamp(start),
                format_timestamp(end)
            )),
            _ => renderer.print_info("The journal is empty."),
        }
        renderer.print_query_errors(&range.errors);
        handled = true;
    }
    if cli.count {
        renderer.print_info(&journal.entry_count().to_string());
        handled = true;
    }
    if cli.summary {
        let summary = journal.summary();
        renderer.print_info(&serde_json::to_string_pretty(&summary)?);
        handled = true;
    }

    if handled {
        Ok(CliModeResult::Finish)
    } else {
        Ok(CliModeResult::NothingToDo)
    }
}

/// Export, backup and the informational flags.
pub fn maintenance_mode(cli: &Cli, renderer: &Renderer, journal: &Journal) -> Result<CliModeResult> {
    if cli.path {
        renderer.print_info(&journal.config.data_dir.display().to_string());
        return Ok(CliModeResult::Finish);
    }
    if cli.moods {
        renderer.print_mood_options();
        return Ok(CliModeResult::Finish);
    }
    if let Some(format) = cli.export.as_deref() {
        let format = ExportFormat::from_str(format)
            .map_err(|_| anyhow!("unknown export format {format:?}; use txt, csv or json"))?;
        let path = journal.export(format)?;
        renderer.print_info(&path.display().to_string());
        return Ok(CliModeResult::Finish);
    }
    if cli.backup {
        let path = journal.backup()?;
        renderer.print_info(&format!("Backup written to {}", path.display()));
        return Ok(CliModeResult::Finish);
    }
    Ok(CliModeResult::NothingToDo)
}

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Show {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Episode {
    pub season: u32,
    pub number: u32,
}

/// One element of `/calendars/my/shows`. Trakt sends more fields
/// (`first_aired`, ids, ...) which are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarItem {
    pub show: Show,
    pub episode: Episode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    pub show: String,
    pub season: u32,
    pub number: u32,
}

impl From<CalendarItem> for CalendarEntry {
    fn from(item: CalendarItem) -> Self {
        CalendarEntry {
            show: item.show.title,
            season: item.episode.season,
            number: item.episode.number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_title_season_and_number() {
        let item: CalendarItem = serde_json::from_value(serde_json::json!({
            "first_aired": "2024-01-01T02:00:00.000Z",
            "episode": {
                "season": 2,
                "number": 5,
                "title": "Pilot",
                "ids": { "trakt": 1 }
            },
            "show": {
                "title": "Foo",
                "year": 2020,
                "ids": { "trakt": 2, "slug": "foo" }
            }
        }))
        .expect("calendar item");

        let entry = CalendarEntry::from(item);
        assert_eq!(
            entry,
            CalendarEntry {
                show: "Foo".to_string(),
                season: 2,
                number: 5,
            }
        );
    }
}

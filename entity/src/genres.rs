use serde::Serialize;

static SEPARATOR: char = ',';

/// Genres of a venue or artist. Stored as a single comma-joined column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Genres(pub Vec<String>);

impl Genres {
    pub fn decode(stored: Option<&str>) -> Self {
        match stored {
            Some(s) => s
                .split(SEPARATOR)
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect(),
            None => Genres::default(),
        }
    }

    pub fn encode(&self) -> String {
        self.0.join(&SEPARATOR.to_string())
    }

    pub fn contains(&self, genre: &str) -> bool {
        self.0.iter().any(|g| g == genre)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<String> for Genres {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Genres(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_values_are_comma_joined() {
        let genres: Genres = ["Jazz", "Rock"].into_iter().map(String::from).collect();
        assert_eq!(genres.encode(), "Jazz,Rock");
    }

    #[test]
    fn stored_value_is_split() {
        let genres = Genres::decode(Some("Jazz,Rock n Roll"));
        assert_eq!(genres.0, vec!["Jazz".to_string(), "Rock n Roll".to_string()]);
        assert!(genres.contains("Rock n Roll"));
    }

    #[test]
    fn missing_or_empty_value_has_no_genres() {
        assert!(Genres::decode(None).is_empty());
        assert!(Genres::decode(Some("")).is_empty());
    }
}

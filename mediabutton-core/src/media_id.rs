/// Episode-id prefixes for server and locally downloaded podcast episodes
pub const DEFAULT_EPISODE_PREFIXES: &[&str] = &["ep_", "local_ep_"];

/// What a play-from-media-id identifier refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaId<'a> {
    /// No id given: play the first available item
    First,
    /// A podcast episode id, looked up together with its podcast
    Episode(&'a str),
    /// A library item id
    Item(&'a str),
}

impl<'a> MediaId<'a> {
    pub fn classify<S: AsRef<str>>(media_id: Option<&'a str>, episode_prefixes: &[S]) -> Self {
        match media_id {
            None | Some("") => MediaId::First,
            Some(id)
                if episode_prefixes
                    .iter()
                    .any(|prefix| id.starts_with(prefix.as_ref())) =>
            {
                MediaId::Episode(id)
            }
            Some(id) => MediaId::Item(id),
        }
    }
}

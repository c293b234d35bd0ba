//! Check for the location dataset.
//!
//! Walks continents then entries in document order. A continent whose value
//! is not a list, and an entry that is not an object or has no name, are
//! reported once and skipped. Every other field check runs independently, so
//! one entry can raise many issues.
//!
//! # Detected Problems
//!
//! - blank or duplicate names (uniqueness is global across continents)
//! - types that are neither the default marker nor registry keys
//! - non-numeric coordinates
//! - wrongly shaped `audio`, `images`, `videos`, `quests`, `pnjs`, `history`,
//!   `lore` and `tags` fields
//! - the legacy `videoTitles` field
//! - referenced audio and image files missing on disk (file checks only)

use asset_lint_core::document::{
    ContinentEntries, EntryShape, Field, LocationEntry, PnjItem, TextGroup, VideoItem,
};
use asset_lint_core::{Check, Issue, IssueKind, Subject, ValidationContext};
use std::collections::HashMap;

/// Check code for locations.
pub const CODE: &str = "AV002";

/// Check name for locations.
pub const NAME: &str = "locations";

/// Validates every location entry against the schema and the type registry.
#[derive(Debug, Clone, Default)]
pub struct LocationsCheck;

impl LocationsCheck {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Check for LocationsCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Validates names, types, coordinates and media fields of every location"
    }

    fn check(&self, ctx: &ValidationContext) -> Vec<Issue> {
        let mut visitor = EntryVisitor {
            ctx,
            issues: Vec::new(),
            seen_names: HashMap::new(),
        };

        for continent in ctx.dataset.continents() {
            if continent.name.trim().is_empty() {
                visitor.push(
                    "continent.name.empty",
                    IssueKind::Schema,
                    Subject::continent(&continent.name),
                    "continent name must not be empty",
                );
                continue;
            }

            let entries = match &continent.entries {
                ContinentEntries::List(entries) => entries,
                ContinentEntries::Malformed(value) => {
                    visitor.push(
                        "continent.type",
                        IssueKind::Schema,
                        Subject::continent(&continent.name),
                        format!("expected a list of locations (got {value})"),
                    );
                    continue;
                }
            };

            for (index, shape) in entries.iter().enumerate() {
                match shape {
                    EntryShape::Record(entry) => visitor.visit_entry(&continent.name, index, entry),
                    EntryShape::NotRecord(value) => visitor.push(
                        "location.invalid",
                        IssueKind::Schema,
                        Subject::entry(&continent.name, index, None),
                        format!("entry must be an object (got {value})"),
                    ),
                }
            }
        }

        visitor.issues
    }
}

struct EntryVisitor<'a> {
    ctx: &'a ValidationContext<'a>,
    issues: Vec<Issue>,
    /// First `continent[index]` address of every name seen so far.
    seen_names: HashMap<String, String>,
}

impl EntryVisitor<'_> {
    fn push(&mut self, code: &str, kind: IssueKind, subject: Subject, message: impl Into<String>) {
        self.issues.push(Issue::new(code, NAME, kind, subject, message));
    }

    fn visit_entry(&mut self, continent: &str, index: usize, entry: &LocationEntry) {
        let Some(name) = entry.name.non_empty() else {
            self.push(
                "location.name.missing",
                IssueKind::Schema,
                Subject::entry(continent, index, None),
                format!("name is missing ({})", entry.name.describe()),
            );
            return;
        };
        let subject = Subject::entry(continent, index, Some(name));

        self.visit_name(name, &subject, continent, index);
        self.visit_type(&entry.kind, &subject);
        self.visit_coordinate("x", &entry.x, &subject);
        self.visit_coordinate("y", &entry.y, &subject);
        self.visit_audio(&entry.audio, &subject);
        self.visit_videos(&entry.videos, &subject);
        if entry.legacy_video_titles {
            self.push(
                "location.video_titles.legacy",
                IssueKind::Legacy,
                subject.clone(),
                "legacy field 'videoTitles' must be migrated into 'videos' titles",
            );
        }
        self.visit_images(&entry.images, &subject);
        self.visit_text_group("quests", &entry.quests, true, &subject);
        self.visit_pnjs(&entry.pnjs, &subject);
        self.visit_text_group("history", &entry.history, false, &subject);
        self.visit_text_group("lore", &entry.lore, false, &subject);
        self.visit_text_group("tags", &entry.tags, false, &subject);
    }

    fn visit_name(&mut self, name: &str, subject: &Subject, continent: &str, index: usize) {
        if let Some(first) = self.seen_names.get(name) {
            let message = format!("duplicate name '{name}' (first seen at {first})");
            self.push(
                "location.name.duplicate",
                IssueKind::Duplicate,
                subject.clone(),
                message,
            );
        } else {
            self.seen_names
                .insert(name.to_string(), format!("{continent}[{index}]"));
        }
    }

    fn visit_type(&mut self, kind: &Field<String>, subject: &Subject) {
        let unknown = match kind {
            Field::Absent => return,
            Field::Present(value) => {
                let value = value.trim();
                if value.is_empty() || self.ctx.is_known_type(value) {
                    return;
                }
                format!("'{value}'")
            }
            Field::Malformed(value) => value.to_string(),
        };
        self.push(
            "location.type.unknown",
            IssueKind::UnknownType,
            subject.clone(),
            format!("unknown type {unknown}"),
        );
    }

    fn visit_coordinate(&mut self, axis: &str, value: &Field<f64>, subject: &Subject) {
        if value.present().is_none() {
            self.push(
                "location.coord.invalid",
                IssueKind::Schema,
                subject.clone(),
                format!("coordinate '{axis}' is invalid ({})", value.describe()),
            );
        }
    }

    fn visit_audio(&mut self, audio: &Field<String>, subject: &Subject) {
        match audio {
            Field::Absent => {}
            Field::Malformed(value) => self.push(
                "location.audio.type",
                IssueKind::Schema,
                subject.clone(),
                format!("field 'audio' must be a string (got {value})"),
            ),
            Field::Present(path) => {
                let path = path.trim();
                if !path.is_empty() && self.ctx.should_check_file(path) && !self.ctx.media_exists(path)
                {
                    self.push(
                        "location.audio.not_found",
                        IssueKind::MissingFile,
                        subject.clone(),
                        format!("audio file not found ({path})"),
                    );
                }
            }
        }
    }

    fn visit_videos(&mut self, videos: &Field<Vec<VideoItem>>, subject: &Subject) {
        let items = match videos {
            Field::Absent => return,
            Field::Malformed(value) => {
                self.push(
                    "location.videos.type",
                    IssueKind::Schema,
                    subject.clone(),
                    format!("field 'videos' must be a list (got {value})"),
                );
                return;
            }
            Field::Present(items) => items,
        };

        for (i, item) in items.iter().enumerate() {
            match item {
                VideoItem::Url(url) => {
                    if url.trim().is_empty() {
                        self.push(
                            "location.videos.url",
                            IssueKind::Schema,
                            subject.clone(),
                            format!("videos[{i}] has an empty URL"),
                        );
                    }
                }
                VideoItem::Linked { url, title } => {
                    if url.non_empty().is_none() {
                        self.push(
                            "location.videos.url",
                            IssueKind::Schema,
                            subject.clone(),
                            format!("videos[{i}] requires a non-empty 'url'"),
                        );
                    }
                    if let Field::Malformed(value) = title {
                        self.push(
                            "location.videos.title",
                            IssueKind::Schema,
                            subject.clone(),
                            format!("videos[{i}] 'title' must be a string (got {value})"),
                        );
                    }
                }
                VideoItem::Other(value) => self.push(
                    "location.videos.entry",
                    IssueKind::Schema,
                    subject.clone(),
                    format!("videos[{i}] must be a URL string or an object (got {value})"),
                ),
            }
        }
    }

    fn visit_images(&mut self, images: &Field<Vec<Field<String>>>, subject: &Subject) {
        let items = match images {
            Field::Absent => return,
            Field::Malformed(value) => {
                self.push(
                    "location.images.type",
                    IssueKind::Schema,
                    subject.clone(),
                    format!("field 'images' must be a list (got {value})"),
                );
                return;
            }
            Field::Present(items) => items,
        };

        for (i, item) in items.iter().enumerate() {
            let Some(path) = item.present() else {
                self.push(
                    "location.images.entry",
                    IssueKind::Schema,
                    subject.clone(),
                    format!("images[{i}] must be a string (got {})", item.describe()),
                );
                continue;
            };
            let path = path.trim();
            if path.is_empty() {
                self.push(
                    "location.images.empty",
                    IssueKind::Schema,
                    subject.clone(),
                    format!("images[{i}] is empty"),
                );
            } else if self.ctx.should_check_file(path) && !self.ctx.media_exists(path) {
                self.push(
                    "location.images.not_found",
                    IssueKind::MissingFile,
                    subject.clone(),
                    format!("image not found ({path})"),
                );
            }
        }
    }

    /// Validates a field holding a string or a list of strings.
    fn visit_text_group(
        &mut self,
        field: &str,
        group: &Field<TextGroup>,
        require_text: bool,
        subject: &Subject,
    ) {
        match group {
            Field::Absent => {}
            Field::Malformed(value) => self.push(
                &format!("location.{field}.type"),
                IssueKind::Schema,
                subject.clone(),
                format!("field '{field}' must be a string or a list of strings (got {value})"),
            ),
            Field::Present(TextGroup::Single(text)) => {
                if require_text && text.trim().is_empty() {
                    self.push(
                        &format!("location.{field}.empty"),
                        IssueKind::Schema,
                        subject.clone(),
                        format!("field '{field}' must not be empty"),
                    );
                }
            }
            Field::Present(TextGroup::List(items)) => {
                for (i, item) in items.iter().enumerate() {
                    let valid = match item.present() {
                        Some(text) => !require_text || !text.trim().is_empty(),
                        None => false,
                    };
                    if valid {
                        continue;
                    }
                    let expected = if require_text {
                        "a non-empty string"
                    } else {
                        "a string"
                    };
                    self.push(
                        &format!("location.{field}.entry"),
                        IssueKind::Schema,
                        subject.clone(),
                        format!("{field}[{i}] must be {expected} (got {})", item.describe()),
                    );
                }
            }
        }
    }

    fn visit_pnjs(&mut self, pnjs: &Field<Vec<PnjItem>>, subject: &Subject) {
        let items = match pnjs {
            Field::Absent => return,
            Field::Malformed(value) => {
                self.push(
                    "location.pnjs.type",
                    IssueKind::Schema,
                    subject.clone(),
                    format!("field 'pnjs' must be a list (got {value})"),
                );
                return;
            }
            Field::Present(items) => items,
        };

        for (i, item) in items.iter().enumerate() {
            let (name, role, description) = match item {
                PnjItem::Record {
                    name,
                    role,
                    description,
                } => (name, role, description),
                PnjItem::Other(value) => {
                    self.push(
                        "location.pnjs.entry",
                        IssueKind::Schema,
                        subject.clone(),
                        format!("pnjs[{i}] must be an object (got {value})"),
                    );
                    continue;
                }
            };

            if name.non_empty().is_none() {
                self.push(
                    "location.pnjs.name",
                    IssueKind::Schema,
                    subject.clone(),
                    format!("pnjs[{i}] requires a non-empty 'name'"),
                );
            }
            for (key, value) in [("role", role), ("description", description)] {
                if let Field::Malformed(raw) = value {
                    self.push(
                        &format!("location.pnjs.{key}"),
                        IssueKind::Schema,
                        subject.clone(),
                        format!("pnjs[{i}] '{key}' must be a string (got {raw})"),
                    );
                }
            }
        }
    }
}

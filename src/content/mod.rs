//! Markdown content: entries, frontmatter, directory scanning, widgets.

mod entry;
mod frontmatter;
mod scan;
mod stats;

pub use entry::{ContentEntry, EntryMeta, JsonMap};
pub use frontmatter::{FrontmatterError, MetaExtractor};
pub use scan::{ContentError, scan_content};
pub use stats::{
    ArchiveBucket, Taxonomy, TermCount, archives, popular_tags, recent_posts, taxonomy, term_slug,
};

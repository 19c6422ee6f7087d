// Colored terminal preview of a normalized post.
//
// Mirrors the block order exactly so the image placement can be checked
// by eye.

use colored::Colorize;

use crate::blog::blocks::{BlogPost, ContentBlock};
use crate::store::StoredPost;

/// Width at which long text is cut in the preview.
const PREVIEW_CHARS: usize = 100;

/// Deepest heading marker drawn; deeper levels render as `######`.
const MAX_HEADING_MARKER: u32 = 6;

/// Display a post block by block.
pub fn display_post(post: &BlogPost) {
    println!("\n{}", format!("=== {} ===", post.title).bold());
    println!("  {}", post.summary.dimmed());
    println!("  Tags: {}", post.tags.join(", ").cyan());
    println!("  Featured image: {}", post.featured_image.dimmed());
    println!();

    for (i, block) in post.content.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, describe_block(block));
    }

    println!();
    println!(
        "  {} blocks, {} images",
        post.content.len(),
        post.image_count()
    );
}

/// Display a saved post with its record metadata.
pub fn display_record(record: &StoredPost) {
    display_post(&record.post);
    println!(
        "  {} by {} on {} ({} min read)",
        record.id.dimmed(),
        record.author,
        record.date,
        record.reading_time
    );
}

/// Display one line per saved post.
pub fn display_record_list(records: &[StoredPost]) {
    if records.is_empty() {
        println!("No saved posts yet. Run `blogsmith generate --save` first.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Saved Posts ({}) ===", records.len()).bold()
    );
    println!();
    for record in records {
        println!(
            "  {}  {}  {}",
            record.id.dimmed(),
            record.date,
            super::truncate_chars(&record.post.title, 60).bold()
        );
    }
    println!();
}

/// Markdown-style `#` marker for a heading level, capped at six.
pub fn heading_marker(level: u32) -> String {
    "#".repeat(level.clamp(1, MAX_HEADING_MARKER) as usize)
}

fn describe_block(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Heading { level, text } => format!(
            "{} {}",
            heading_marker(*level).bright_blue(),
            text.bold()
        ),
        ContentBlock::Paragraph { text } => super::truncate_chars(text, PREVIEW_CHARS),
        ContentBlock::Image { url, caption, .. } => format!(
            "{} {} {}",
            "[image]".bright_magenta(),
            caption,
            url.dimmed()
        ),
        ContentBlock::List { ordered, items } => {
            let marker = if *ordered { "1." } else { "-" };
            let rendered: Vec<String> = items
                .iter()
                .map(|item| format!("{marker} {}", super::truncate_chars(item, PREVIEW_CHARS)))
                .collect();
            format!("{} {}", "[list]".yellow(), rendered.join("  "))
        }
        ContentBlock::Quote { text, citation } => format!(
            "{} \"{}\" ({})",
            "[quote]".green(),
            super::truncate_chars(text, PREVIEW_CHARS).italic(),
            citation.dimmed()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_marker_is_capped() {
        assert_eq!(heading_marker(2), "##");
        assert_eq!(heading_marker(u32::MAX), "######");
    }
}

//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{ExportedProject, SharedDetails};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for SharedDetails {
    fn pretty_print(&self) -> String {
        let header = format!(
            "Shared #{}: {}",
            self.shared_id,
            self.display_name().unwrap_or("(unnamed)")
        );
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("Uploader:       {} ({})", self.user_alias, self.uploader_id),
        ];

        if !self.short_description.is_empty() {
            lines.push(format!("Summary:        {}", self.short_description));
        }

        lines.push(format!(
            "Activity:       {} downloads, {} likes, {} comments",
            self.download_count, self.like_count, self.comment_count
        ));
        lines.push(format!("Registered:     {}", self.register_date));
        lines.push(format!("Updated:        {}", self.update_date));

        if !self.long_description.is_empty() {
            lines.push(String::new());
            lines.push(self.long_description.clone());
        }

        lines.join("\n")
    }
}

impl PrettyPrint for ExportedProject {
    fn pretty_print(&self) -> String {
        let header = format!("Export #{}: {}", self.url_id, self.app_name);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("Package:        {}", self.package_name),
            format!("Owner:          {} ({})", self.alias, self.user_id),
        ];

        if let Some(registered) = self.registered_at() {
            lines.push(format!(
                "Registered:     {}",
                registered.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        if let Some(expires) = self.expires_at() {
            lines.push(format!(
                "Expires:        {}",
                expires.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_pretty_print_format() {
        let details: SharedDetails = serde_json::from_value(serde_json::json!({
            "long_desc": "",
            "update_dt": "2020-06-01",
            "shared_id": 7,
            "user_alias": "maker",
            "short_desc": "Short",
            "recommend": 0,
            "reg_dt": "2020-05-01",
            "down_cnt": 1,
            "file_seq": "f",
            "like_cnt": 2,
            "comment_cnt": 3,
            "images_seq": "i",
            "uploader_id": 99,
            "block_name": "Bar"
        }))
        .unwrap();

        let output = details.pretty_print();
        assert!(output.starts_with("Shared #7: Bar"));
        assert!(output.contains("1 downloads, 2 likes, 3 comments"));
    }

    #[test]
    fn test_export_pretty_print_format() {
        let project: ExportedProject = serde_json::from_value(serde_json::json!({
            "alias": "me",
            "pkg_name": "com.example.app",
            "url_id": 5,
            "user_id": 77,
            "app_name": "Example",
            "reg_dt": "1577836800000",
            "expire_dt": "1580515200000"
        }))
        .unwrap();

        let output = project.pretty_print();
        assert!(output.starts_with("Export #5: Example"));
        assert!(output.contains("Registered:     2020-01-01 00:00:00 UTC"));
    }
}

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

fn write_archive(dir: &TempDir, members: &[(&str, &str)]) -> PathBuf {
    let path = dir.path().join("export.zip");
    let mut writer = zip::ZipWriter::new(File::create(&path).unwrap());
    for (name, content) in members {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    path
}

#[test]
fn test_load_watch_history_preserves_input_order() {
    let dir = TempDir::new().unwrap();
    let path = write_archive(
        &dir,
        &[(
            "Watch History.txt",
            "Date: 2024-01-06 22:00:00\n\
             Link: https://www.tiktok.com/video/2\n\
             Date: 2024-01-05 09:15:00\n\
             Link: https://www.tiktok.com/video/1\n",
        )],
    );

    let events = tokmirror_cli::commands::watch::load_watch_history(&path).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].video_id.as_deref(), Some("2"));
    assert_eq!(events[1].video_id.as_deref(), Some("1"));
}

#[test]
fn test_load_watch_history_missing_member() {
    let dir = TempDir::new().unwrap();
    let path = write_archive(&dir, &[("Like List.txt", "Link: https://a/video/1\n")]);

    let result = tokmirror_cli::commands::watch::load_watch_history(&path);
    assert!(result.is_err());
}

#[test]
fn test_load_like_domains_skips_malformed_urls() {
    let dir = TempDir::new().unwrap();
    let path = write_archive(
        &dir,
        &[(
            "Like List.txt",
            "Link: https://www.tiktok.com/video/1\n\
             Link: not a url at all\n\
             Link: https://www.tiktok.com/video/2\n",
        )],
    );

    let domains = tokmirror_cli::commands::likes::load_like_domains(&path).unwrap();
    assert_eq!(domains.len(), 1);
    assert_eq!(domains[0].domain, "tiktok.com");
    assert_eq!(domains[0].count, 2);
}

#[test]
fn test_load_term_counts_normalizes_terms() {
    let dir = TempDir::new().unwrap();
    let path = write_archive(
        &dir,
        &[(
            "Recent Searches.txt",
            "SearchTerm: Cats\nSearchTerm: CATS \nSearchTerm: dogs\n",
        )],
    );

    let terms = tokmirror_cli::commands::searches::load_term_counts(&path).unwrap();
    assert_eq!(terms.len(), 2);
    assert_eq!(terms[0].term, "cats");
    assert_eq!(terms[0].count, 2);
}

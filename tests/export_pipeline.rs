use chat_archive::export::{format_time, process_archive};
use chat_archive::{ArchiveError, ExportConfig};
use serde_json::json;
use std::fs;

fn write_archive(dir: &std::path::Path, archive: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.join("conversations.json");
    fs::write(&path, serde_json::to_vec(archive).expect("serialize archive")).expect("write archive");
    path
}

#[test]
fn archive_exports_markdown_segments() {
    let workdir = tempfile::tempdir().expect("tempdir");
    let out_dir = workdir.path().join("segments");
    let archive = json!([
        {
            "title": "Trip planning",
            "mapping": {
                "root": {"parent": null, "children": ["q"]},
                "q": {
                    "parent": "root",
                    "children": ["a"],
                    "message": {"author": {"role": "user"}, "content": {"parts": ["Where to?"]}, "create_time": 1_700_000_000}
                },
                "a": {
                    "parent": "q",
                    "children": [],
                    "message": {"author": {"role": "assistant"}, "content": {"parts": ["Lisbon."]}, "create_time": 1_700_000_030}
                }
            }
        },
        {
            "title": null,
            "mapping": {
                "only": {"children": [], "message": {"author": {"role": "user"}, "content": {"parts": ["ping"]}}}
            }
        }
    ]);
    let path = write_archive(workdir.path(), &archive);

    let config = ExportConfig::from_env()
        .with_output_dir(&out_dir)
        .with_gap_minutes(30.0)
        .with_jobs(2);
    let stats = process_archive(&path, &config).expect("export succeeds");

    assert_eq!(stats.conversations, 2);
    assert_eq!(stats.threads, 2);
    assert_eq!(stats.segments, 3);
    assert_eq!(stats.files, 3);

    let mut names: Vec<String> = fs::read_dir(&out_dir)
        .expect("output dir exists")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "conv000_thread00_seg00.md",
            "conv000_thread00_seg01.md",
            "conv001_thread00_seg00.md",
        ]
    );

    let answer = fs::read_to_string(out_dir.join("conv000_thread00_seg01.md")).expect("read segment");
    assert_eq!(
        answer,
        format!(
            "# Trip planning - Thread 0 Segment 1\n\n**{} - assistant:**\nLisbon.\n\n",
            format_time(Some(1_700_000_030.0))
        )
    );

    let untitled = fs::read_to_string(out_dir.join("conv001_thread00_seg00.md")).expect("read segment");
    assert_eq!(
        untitled,
        "# Conversation 1 - Thread 0 Segment 0\n\n**N/A - user:**\nping\n\n"
    );
}

#[test]
fn non_array_archive_is_rejected() {
    let workdir = tempfile::tempdir().expect("tempdir");
    let path = write_archive(workdir.path(), &json!({"title": "not a list"}));
    let config = ExportConfig::from_env().with_output_dir(workdir.path().join("out"));

    let err = process_archive(&path, &config).expect_err("object root must fail");
    assert!(matches!(err, ArchiveError::NotAnArray { .. }));
}

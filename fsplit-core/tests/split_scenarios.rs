//! End-to-end split scenarios against files on disk

use fsplit_core::*;
use std::fs;
use std::io;
use std::num::NonZeroU64;
use std::path::Path;
use tempfile::TempDir;

/// `line 1\n` .. `line n\n`
fn numbered_lines(n: usize) -> String {
    (1..=n).map(|i| format!("line {i}\n")).collect()
}

fn patterned_bytes(n: usize) -> Vec<u8> {
    (0..n).map(|i| (i % 256) as u8).collect()
}

fn write_input(dir: &Path, content: &[u8]) -> FileInput {
    let path = dir.join("input.txt");
    fs::write(&path, content).unwrap();
    FileInput::new(path)
}

fn run(
    strategy: SplitStrategy,
    input: &FileInput,
    out_dir: &Path,
    echo: &mut Vec<u8>,
) -> SplitReport {
    let names = NameGenerator::alphabetic("output", 2);
    strategy
        .run(input, &names, FileSink::in_dir(out_dir), echo)
        .unwrap()
}

fn read_chunks(out_dir: &Path, report: &SplitReport) -> Vec<Vec<u8>> {
    report
        .names()
        .map(|name| fs::read(out_dir.join(name)).unwrap())
        .collect()
}

fn line_count(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count()
}

fn file_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

struct Workspace {
    _root: TempDir,
    input: FileInput,
    out: std::path::PathBuf,
}

fn workspace(content: &[u8]) -> Workspace {
    let root = TempDir::new().unwrap();
    let input = write_input(root.path(), content);
    let out = root.path().join("out");
    fs::create_dir(&out).unwrap();
    Workspace {
        _root: root,
        input,
        out,
    }
}

#[test]
fn test_lines_1000_over_2007_lines() {
    let content = numbered_lines(2007);
    let ws = workspace(content.as_bytes());

    let strategy = SplitStrategy::lines(NonZeroU64::new(1000).unwrap());
    let report = run(strategy, &ws.input, &ws.out, &mut Vec::new());

    assert_eq!(
        report.names().collect::<Vec<_>>(),
        vec!["outputaa", "outputab", "outputac"]
    );
    let chunks = read_chunks(&ws.out, &report);
    let counts: Vec<usize> = chunks.iter().map(|c| line_count(c)).collect();
    assert_eq!(counts, vec![1000, 1000, 7]);
    assert_eq!(chunks.concat(), content.as_bytes());
    assert_eq!(file_count(&ws.out), 3);
}

#[test]
fn test_lines_500_over_2007_lines() {
    let content = numbered_lines(2007);
    let ws = workspace(content.as_bytes());

    let strategy = SplitStrategy::lines(NonZeroU64::new(500).unwrap());
    let report = run(strategy, &ws.input, &ws.out, &mut Vec::new());

    let chunks = read_chunks(&ws.out, &report);
    let counts: Vec<usize> = chunks.iter().map(|c| line_count(c)).collect();
    assert_eq!(counts, vec![500, 500, 500, 500, 7]);
    assert_eq!(chunks.concat(), content.as_bytes());
}

#[test]
fn test_bytes_1k_over_2500_bytes() {
    let content = patterned_bytes(2500);
    let ws = workspace(&content);

    let report = run(
        SplitStrategy::bytes("1k").unwrap(),
        &ws.input,
        &ws.out,
        &mut Vec::new(),
    );

    let sizes: Vec<u64> = report.chunks.iter().map(|c| c.bytes).collect();
    assert_eq!(sizes, vec![1024, 1024, 452]);
    assert_eq!(read_chunks(&ws.out, &report).concat(), content);
}

#[test]
fn test_bytes_exact_multiple_leaves_no_empty_chunk() {
    let content = patterned_bytes(3072);
    let ws = workspace(&content);

    let report = run(
        SplitStrategy::bytes("1k").unwrap(),
        &ws.input,
        &ws.out,
        &mut Vec::new(),
    );

    assert_eq!(report.len(), 3);
    assert_eq!(file_count(&ws.out), 3);
    assert!(!ws.out.join("outputad").exists());
}

#[test]
fn test_bytes_1m_over_larger_input() {
    let content = patterned_bytes(1024 * 1024 * 2 + 402_848);
    let ws = workspace(&content);

    let report = run(
        SplitStrategy::bytes("1m").unwrap(),
        &ws.input,
        &ws.out,
        &mut Vec::new(),
    );

    let sizes: Vec<u64> = report.chunks.iter().map(|c| c.bytes).collect();
    assert_eq!(sizes, vec![1_048_576, 1_048_576, 402_848]);
    assert_eq!(read_chunks(&ws.out, &report).concat(), content);
}

#[test]
fn test_sequential_strategies_on_empty_input() {
    for strategy in [
        SplitStrategy::default(),
        SplitStrategy::bytes("1m").unwrap(),
        SplitStrategy::pieces("3").unwrap(),
        SplitStrategy::pieces("l/3").unwrap(),
        SplitStrategy::pieces("r/3").unwrap(),
    ] {
        let ws = workspace(b"");
        let report = run(strategy, &ws.input, &ws.out, &mut Vec::new());
        assert!(report.is_empty(), "{strategy:?}");
        assert_eq!(file_count(&ws.out), 0, "{strategy:?}");
    }
}

#[test]
fn test_byte_pieces_5000_bytes_into_3() {
    let content = patterned_bytes(5000);
    let ws = workspace(&content);

    let report = run(
        SplitStrategy::pieces("3").unwrap(),
        &ws.input,
        &ws.out,
        &mut Vec::new(),
    );

    let sizes: Vec<u64> = report.chunks.iter().map(|c| c.bytes).collect();
    assert_eq!(sizes, vec![1667, 1667, 1666]);
    assert_eq!(read_chunks(&ws.out, &report).concat(), content);
}

#[test]
fn test_byte_pieces_4999_bytes_into_3() {
    let content = patterned_bytes(4999);
    let ws = workspace(&content);

    let report = run(
        SplitStrategy::pieces("3").unwrap(),
        &ws.input,
        &ws.out,
        &mut Vec::new(),
    );

    let sizes: Vec<u64> = report.chunks.iter().map(|c| c.bytes).collect();
    assert_eq!(sizes, vec![1667, 1667, 1665]);
}

#[test]
fn test_line_pieces_2007_lines_into_3() {
    let content = numbered_lines(2007);
    let ws = workspace(content.as_bytes());

    let report = run(
        SplitStrategy::pieces("l/3").unwrap(),
        &ws.input,
        &ws.out,
        &mut Vec::new(),
    );

    let chunks = read_chunks(&ws.out, &report);
    let counts: Vec<usize> = chunks.iter().map(|c| line_count(c)).collect();
    assert_eq!(counts, vec![669, 669, 669]);
    assert_eq!(chunks.concat(), content.as_bytes());
}

#[test]
fn test_round_robin_2007_lines_into_3() {
    let content = numbered_lines(2007);
    let ws = workspace(content.as_bytes());

    let report = run(
        SplitStrategy::pieces("r/3").unwrap(),
        &ws.input,
        &ws.out,
        &mut Vec::new(),
    );

    let chunks = read_chunks(&ws.out, &report);
    let counts: Vec<usize> = chunks.iter().map(|c| line_count(c)).collect();
    assert_eq!(counts, vec![669, 669, 669]);
    assert_ne!(chunks.concat(), content.as_bytes());
    assert!(String::from_utf8_lossy(&chunks[1]).starts_with("line 2\nline 5\n"));
}

#[test]
fn test_round_robin_713_lines_into_4() {
    let content = numbered_lines(713);
    let ws = workspace(content.as_bytes());

    let report = run(
        SplitStrategy::pieces("r/4").unwrap(),
        &ws.input,
        &ws.out,
        &mut Vec::new(),
    );

    let counts: Vec<usize> = read_chunks(&ws.out, &report)
        .iter()
        .map(|c| line_count(c))
        .collect();
    assert_eq!(counts, vec![179, 178, 178, 178]);
    assert_eq!(file_count(&ws.out), 4);
}

#[test]
fn test_select_echoes_round_robin_piece() {
    let content = numbered_lines(2005);
    let ws = workspace(content.as_bytes());

    let mut echoed = Vec::new();
    let report = run(
        SplitStrategy::pieces("r/2/3").unwrap(),
        &ws.input,
        &ws.out,
        &mut echoed,
    );

    let chunks = read_chunks(&ws.out, &report);
    let counts: Vec<usize> = chunks.iter().map(|c| line_count(c)).collect();
    assert_eq!(counts, vec![669, 668, 668]);
    assert_eq!(echoed, chunks[1]);
}

#[test]
fn test_select_echoes_line_piece() {
    let content = numbered_lines(2007);
    let ws = workspace(content.as_bytes());

    let mut echoed = Vec::new();
    let report = run(
        SplitStrategy::pieces("l/3/3").unwrap(),
        &ws.input,
        &ws.out,
        &mut echoed,
    );

    let chunks = read_chunks(&ws.out, &report);
    assert_eq!(echoed, chunks[2]);
    assert!(String::from_utf8_lossy(&echoed).ends_with("line 2007\n"));
}

#[test]
fn test_select_echoes_byte_piece() {
    let content = patterned_bytes(5000);
    let ws = workspace(&content);

    let mut echoed = Vec::new();
    run(
        SplitStrategy::pieces("1/3").unwrap(),
        &ws.input,
        &ws.out,
        &mut echoed,
    );

    assert_eq!(echoed, &content[..1667]);
}

#[test]
fn test_select_of_missing_piece_echoes_nothing() {
    let ws = workspace(b"ab");

    let mut echoed = Vec::new();
    let report = run(
        SplitStrategy::pieces("5/5").unwrap(),
        &ws.input,
        &ws.out,
        &mut echoed,
    );

    assert_eq!(report.len(), 2);
    assert!(echoed.is_empty());
}

#[test]
fn test_numeric_names_without_prefix() {
    let content = numbered_lines(2002);
    let ws = workspace(content.as_bytes());
    let names = NameGenerator::numeric("", 3);

    let report = SplitStrategy::lines(NonZeroU64::new(700).unwrap())
        .run(&ws.input, &names, FileSink::in_dir(&ws.out), &mut io::sink())
        .unwrap();

    assert_eq!(
        report.names().collect::<Vec<_>>(),
        vec!["x000", "x001", "x002"]
    );
    let counts: Vec<usize> = read_chunks(&ws.out, &report)
        .iter()
        .map(|c| line_count(c))
        .collect();
    assert_eq!(counts, vec![700, 700, 602]);
}

#[test]
fn test_running_out_of_names_keeps_completed_chunks() {
    let content = numbered_lines(12);
    let ws = workspace(content.as_bytes());
    let names = NameGenerator::numeric("part", 1);

    let result = SplitStrategy::lines(NonZeroU64::MIN).run(
        &ws.input,
        &names,
        FileSink::in_dir(&ws.out),
        &mut io::sink(),
    );

    assert!(matches!(
        result,
        Err(SplitError::TooManyChunks { index: 10, width: 1 })
    ));
    assert_eq!(file_count(&ws.out), 10);
    assert_eq!(fs::read_to_string(ws.out.join("part9")).unwrap(), "line 10\n");
}

#[test]
fn test_missing_input_is_read_error() {
    let root = TempDir::new().unwrap();
    let input = FileInput::new(root.path().join("missing.txt"));

    let result = SplitStrategy::default().run(
        &input,
        &NameGenerator::default(),
        FileSink::in_dir(root.path()),
        &mut io::sink(),
    );

    assert!(matches!(result, Err(SplitError::InputReadFailed(_))));
}

#[test]
fn test_unwritable_output_is_write_error() {
    let ws = workspace(b"data\n");

    let result = SplitStrategy::default().run(
        &ws.input,
        &NameGenerator::default(),
        FileSink::in_dir(ws.out.join("does-not-exist")),
        &mut io::sink(),
    );

    match result {
        Err(SplitError::OutputWriteFailed { name, .. }) => assert_eq!(name, "xaa"),
        other => panic!("Expected OutputWriteFailed, got {other:?}"),
    }
}

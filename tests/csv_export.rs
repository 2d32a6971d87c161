mod common;

use common::FakeRuntime;
use rust_mt::frame::{Column, CsvOptions, DataFrame, Value};
use rust_mt::translation::{SingleModelConfig, SingleModelTranslator, Translate};
use std::fs;
use tempfile::TempDir;

fn translator_writing_to(
    dir: &TempDir,
    include_index: bool,
) -> anyhow::Result<SingleModelTranslator<FakeRuntime>> {
    let config = SingleModelConfig {
        output_path: dir.path().join("trial.csv"),
        include_index,
        ..Default::default()
    };
    Ok(SingleModelTranslator::new(config, FakeRuntime::multilingual())?)
}

#[test]
fn save_csv_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let translator = translator_writing_to(&dir, false)?;
    let mut data = DataFrame::from_columns(vec![Column::new(
        "text",
        vec!["adsa", "ohayo, gozaimasu"],
    )])?;
    let translations = translator.column_translate(&data, "text")?;
    data.push_column(Column::new("translation", translations))?;

    translator.save_csv(&data)?;

    let read_back = DataFrame::read_csv(dir.path().join("trial.csv"))?;
    assert_eq!(read_back.column_names(), vec!["text", "translation"]);
    assert_eq!(read_back.height(), 2);
    assert_eq!(
        read_back.column("translation")?.values(),
        &[
            Value::from("Adsa"),
            Value::from("Ohayo, Gozaimasu"),
        ]
    );
    assert_eq!(read_back, data);
    Ok(())
}

#[test]
fn save_csv_without_index_column() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let translator = translator_writing_to(&dir, false)?;
    let data = DataFrame::from_columns(vec![Column::new("text", vec!["a", "b"])])?;

    translator.save_csv(&data)?;

    let content = fs::read_to_string(dir.path().join("trial.csv"))?;
    assert_eq!(content, "text\na\nb\n");
    Ok(())
}

#[test]
fn save_csv_with_index_column() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let translator = translator_writing_to(&dir, true)?;
    let data = DataFrame::from_columns(vec![Column::new("text", vec!["a", "b"])])?;

    translator.save_csv(&data)?;

    let content = fs::read_to_string(dir.path().join("trial.csv"))?;
    assert_eq!(content, ",text\n0,a\n1,b\n");
    Ok(())
}

#[test]
fn save_csv_overwrites_existing_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let translator = translator_writing_to(&dir, false)?;
    fs::write(dir.path().join("trial.csv"), "previous,content\n1,2\n3,4\n5,6\n")?;
    let data = DataFrame::from_columns(vec![Column::new("text", vec!["a"])])?;

    translator.save_csv(&data)?;

    let content = fs::read_to_string(dir.path().join("trial.csv"))?;
    assert_eq!(content, "text\na\n");
    Ok(())
}

#[test]
fn save_csv_with_explicit_index_setting() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let translator = translator_writing_to(&dir, false)?;
    let data = DataFrame::from_columns(vec![Column::new("text", vec!["a"])])?;

    translator.save_csv_with_index(&data, true)?;

    let content = fs::read_to_string(dir.path().join("trial.csv"))?;
    assert_eq!(content, ",text\n0,a\n");
    Ok(())
}

#[test]
fn save_csv_to_missing_directory_fails() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = SingleModelConfig {
        output_path: dir.path().join("missing").join("trial.csv"),
        ..Default::default()
    };
    let translator = SingleModelTranslator::new(config, FakeRuntime::multilingual())?;
    let data = DataFrame::from_columns(vec![Column::new("text", vec!["a"])])?;

    let result = translator.save_csv(&data);

    assert!(matches!(result, Err(rust_mt::TranslatorError::IOError(_))));
    Ok(())
}

#[test]
fn save_csv_round_trip_keeps_empty_text() -> anyhow::Result<()> {
    common::init_logging();
    let dir = tempfile::tempdir()?;
    let translator = translator_writing_to(&dir, false)?;
    let mut data = DataFrame::from_columns(vec![Column::new("text", vec!["adsa", ""])])?;
    let translations = translator.column_translate(&data, "text")?;
    data.push_column(Column::new("translation", translations))?;

    translator.save_csv(&data)?;
    let read_back = DataFrame::read_csv(dir.path().join("trial.csv"))?;

    assert_eq!(read_back.column("text")?.values()[1], Value::from(""));
    assert_eq!(read_back, data);
    assert_eq!(
        translator.column_translate(&read_back, "text")?,
        translator.column_translate(&data, "text")?
    );
    Ok(())
}

#[test]
fn read_csv_tab_delimited() -> anyhow::Result<()> {
    let options = CsvOptions {
        delimiter: b'\t',
        empty_as_null: true,
        ..Default::default()
    };
    let data = DataFrame::read_csv_from("text\tnote\nadsa\t\n".as_bytes(), &options)?;

    assert_eq!(data.column("text")?.values(), &[Value::from("adsa")]);
    assert!(data.column("note")?.values()[0].is_null());

    let mut buffer = Vec::new();
    data.write_csv(&mut buffer, &options)?;
    assert!(String::from_utf8(buffer)?.starts_with("text\tnote\n"));
    Ok(())
}

#[test]
fn read_csv_with_options_from_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("input.csv");
    fs::write(&path, "text,note\nadsa,\n")?;

    let as_text = DataFrame::read_csv(&path)?;
    let as_null = DataFrame::read_csv_with(
        &path,
        &CsvOptions {
            empty_as_null: true,
            ..Default::default()
        },
    )?;

    assert_eq!(as_text.column("note")?.values(), &[Value::from("")]);
    assert_eq!(as_null.column("note")?.values(), &[Value::Null]);
    Ok(())
}

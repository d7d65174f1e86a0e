mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::Command;
    use predicates::prelude::*;
    use predicates::str::{contains, is_empty};

    use std::io::Write;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "urlscan";

    fn urlscan() -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("--no-config");
        Ok(cmd)
    }

    fn text_file(content: &str) -> Result<tempfile::NamedTempFile, Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(content.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn test_output__when_reading_stdin() -> TestResult {
        let mut cmd = urlscan()?;

        cmd.write_stdin("Visit www.flickr.com, 500px.com and https://postimage.io");

        cmd.assert().success().stdout(
            "http://www.flickr.com/\nhttp://500px.com/\nhttps://postimage.io/\n",
        );
        Ok(())
    }

    #[test]
    fn test_output__when_stdin_is_named() -> TestResult {
        let mut cmd = urlscan()?;

        cmd.arg("-").write_stdin("google.com");

        cmd.assert().success().stdout("http://google.com/\n");
        Ok(())
    }

    #[test]
    fn test_output__when_no_links_found() -> TestResult {
        let mut cmd = urlscan()?;

        cmd.write_stdin("picture.dog.jpg and nothing else");

        cmd.assert().success().stdout(is_empty());
        Ok(())
    }

    #[test]
    fn test_output__when_scanning_files_in_order() -> TestResult {
        let first = text_file("first.com")?;
        let second = text_file("second.org, then first.com again")?;
        let mut cmd = urlscan()?;

        cmd.arg(first.path()).arg(second.path());

        cmd.assert()
            .success()
            .stdout("http://first.com/\nhttp://second.org/\nhttp://first.com/\n");
        Ok(())
    }

    #[test]
    fn test_output__when_format_is_json() -> TestResult {
        let file = text_file("ftp://someftpaddress.com")?;
        let file_name = file.path().display().to_string();
        let mut cmd = urlscan()?;

        cmd.arg(file.path()).arg("--format").arg("json");

        let output = cmd.assert().success().get_output().stdout.clone();
        let value: serde_json::Value = serde_json::from_slice(&output)?;
        assert_eq!(value[0]["source"], file_name.as_str());
        assert_eq!(value[0]["urls"][0], "ftp://someftpaddress.com/");
        Ok(())
    }

    #[test]
    fn test_output__when_backend_differs() -> TestResult {
        let mut pattern = urlscan()?;
        pattern
            .args(["--backend", "pattern"])
            .write_stdin("</span>google.com");
        pattern.assert().success().stdout(is_empty());

        let mut grammar = urlscan()?;
        grammar
            .args(["--backend", "grammar"])
            .write_stdin("</span>google.com");
        grammar.assert().success().stdout("http://google.com/\n");
        Ok(())
    }

    #[test]
    fn test_output__when_input_too_large() -> TestResult {
        let mut cmd = urlscan()?;

        cmd.args(["--max-length", "5"]).write_stdin("google.com");

        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("Input too large: 10 UTF-16 code units (limit is 5)"));
        Ok(())
    }

    #[test]
    fn test_output__when_max_length_is_zero() -> TestResult {
        let mut cmd = urlscan()?;

        cmd.args(["--max-length", "0"]).write_stdin("google.com");

        cmd.assert().failure().code(1).stderr(contains("Invalid argument"));
        Ok(())
    }

    #[test]
    fn test_output__when_file_is_missing() -> TestResult {
        let mut cmd = urlscan()?;

        cmd.arg("/nonexistent/notes.md");

        cmd.assert().failure().code(1).stderr(contains("IO error"));
        Ok(())
    }

    #[test]
    fn test_output__when_suffix_list_is_missing() -> TestResult {
        let mut cmd = urlscan()?;

        cmd.args(["--suffix-list", "/nonexistent/suffixes.dat"])
            .write_stdin("google.com");

        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("Suffix list error"));
        Ok(())
    }

    #[test]
    fn test_output__when_suffix_list_is_custom() -> TestResult {
        let list = text_file("// test list\njpg\n")?;
        let mut cmd = urlscan()?;

        cmd.args(["--backend", "pattern", "--suffix-list"])
            .arg(list.path())
            .write_stdin("picture.dog.jpg and google.com");

        cmd.assert().success().stdout("http://picture.dog.jpg/\n");
        Ok(())
    }

    #[test]
    fn test_output__when_backend_is_unknown() -> TestResult {
        let mut cmd = urlscan()?;

        cmd.args(["--backend", "regex"]).write_stdin("google.com");

        cmd.assert().failure().stderr(contains("invalid value 'regex'"));
        Ok(())
    }

    #[test]
    fn test_config__when_file_sets_format() -> TestResult {
        let config = text_file("output_format = \"json\"\nbackend = \"pattern\"\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--config")
            .arg(config.path())
            .write_stdin("</span>google.com www.google.com");

        cmd.assert()
            .success()
            .stdout(contains("\"source\": \"<stdin>\""))
            .stdout(contains("http://www.google.com/"))
            .stdout(contains("http://google.com/").not());
        Ok(())
    }

    #[test]
    fn test_config__when_cli_overrides_file() -> TestResult {
        let config = text_file("output_format = \"json\"\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--config")
            .arg(config.path())
            .args(["--format", "text"])
            .write_stdin("google.com");

        cmd.assert().success().stdout("http://google.com/\n");
        Ok(())
    }

    #[test]
    fn test_config__when_file_is_invalid() -> TestResult {
        let config = text_file("max_input_length = 0\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--config").arg(config.path()).write_stdin("google.com");

        cmd.assert()
            .failure()
            .code(1)
            .stderr(contains("Configuration error"));
        Ok(())
    }

    #[test]
    fn test_config__when_found_in_working_directory() -> TestResult {
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join(".urlscan.toml"),
            "output_format = \"json\"\n",
        )?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.current_dir(dir.path()).write_stdin("google.com");

        cmd.assert()
            .success()
            .stdout(contains("\"urls\": [\n      \"http://google.com/\"\n    ]"));
        Ok(())
    }
}

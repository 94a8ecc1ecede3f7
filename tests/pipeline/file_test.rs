#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use crate::utils::{
        header_line, moderate_record, no_risk_record, output_rows, record_line, scs_record,
        test_config, write_input,
    };
    use arrow::array::{Int64Array, StringArray, UInt8Array};
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
    use risk_kb::{Field, KbError, TARGET_LABEL_COLUMN, run};
    use tempfile::tempdir;

    #[test]
    fn test_labels_every_row_in_order() {
        let dir = tempdir().unwrap();
        let records = vec![
            scs_record("1"),
            moderate_record("2"),
            no_risk_record("3"),
            scs_record("4"),
            no_risk_record("5"),
        ];
        let lines = records.iter().map(record_line).collect::<Vec<_>>();
        let input = write_input(dir.path(), "data.csv", &header_line(), &lines);
        let config = test_config(dir.path(), &input, "KB.csv");

        let summary = run(&config).unwrap();
        assert_eq!(summary.total, 5);
        assert_eq!(summary.high, 2);
        assert_eq!(summary.moderate, 1);
        assert_eq!(summary.no_risk, 2);

        let (header, rows) = output_rows(&config.output_path);
        assert_eq!(header, format!("{},{TARGET_LABEL_COLUMN}", header_line()));
        assert_eq!(rows.len(), records.len());

        let ids = rows.iter().map(|row| row[0].as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        let labels = rows.iter().map(|row| row[19].as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["2", "1", "0", "2", "0"]);

        // input columns are copied through unchanged
        for (row, line) in rows.iter().zip(&lines) {
            assert_eq!(row[..19].join(","), *line);
        }
        assert!(!dir.path().join("KB.csv.partial").exists());
    }

    #[test]
    fn test_blank_cells_read_as_zero() {
        let dir = tempdir().unwrap();
        let zero = record_line(&no_risk_record("1"));
        let blank = zero
            .split(',')
            .enumerate()
            .map(|(idx, cell)| if idx >= 2 { " " } else { cell })
            .collect::<Vec<_>>()
            .join(",");
        let input = write_input(dir.path(), "data.csv", &header_line(), &[zero.clone(), blank]);
        let config = test_config(dir.path(), &input, "KB.csv");

        run(&config).unwrap();

        let (_, rows) = output_rows(&config.output_path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], rows[1]);
        assert_eq!(rows[1][Field::MentalPain.index()], "0");
    }

    #[test]
    fn test_schema_mismatch_fails_before_writing() {
        let dir = tempdir().unwrap();
        let short_header = header_line().replace(",social_connectedness", "");
        let input = write_input(dir.path(), "short.csv", &short_header, &[]);
        let config = test_config(dir.path(), &input, "KB.csv");

        let err = run(&config).unwrap_err();
        assert!(err.is_schema_mismatch(), "{err}");
        assert!(!config.output_path.exists());

        let renamed = header_line().replace("SCS", "capability");
        let line = record_line(&scs_record("1"));
        let input = write_input(dir.path(), "renamed.csv", &renamed, &[line]);
        let config = test_config(dir.path(), &input, "KB.csv");

        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("'SCS'"), "{err}");
        assert!(!config.output_path.exists());

        // names are only advisory when validation is relaxed
        let config = config.with_header_name_validation(false);
        assert_eq!(run(&config).unwrap().high, 1);
    }

    #[test]
    fn test_malformed_cell_leaves_no_output() {
        let dir = tempdir().unwrap();
        let good = record_line(&scs_record("1"));
        let bad = record_line(&moderate_record("2")).replace(",40,", ",forty,");
        let lines = vec![good.clone(), good.clone(), good, bad];
        let input = write_input(dir.path(), "data.csv", &header_line(), &lines);
        let config = test_config(dir.path(), &input, "KB.csv");

        match run(&config).unwrap_err() {
            KbError::MalformedInput { row, column, value, .. } => {
                assert_eq!(row, 4);
                assert_eq!(column, "mental_pain");
                assert_eq!(value, "forty");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!config.output_path.exists());
        assert!(!dir.path().join("KB.csv.partial").exists());
    }

    #[test]
    fn test_empty_and_ragged_rows_are_rejected() {
        let dir = tempdir().unwrap();
        let empty_cell = record_line(&no_risk_record("1")).replacen(",30,", ",,", 1);
        let input = write_input(dir.path(), "empty.csv", &header_line(), &[empty_cell]);
        let config = test_config(dir.path(), &input, "KB.csv");
        let err = run(&config).unwrap_err();
        assert!(err.is_malformed_input(), "{err}");
        assert!(err.to_string().contains("missing value"), "{err}");

        let ragged = record_line(&no_risk_record("1")) + ",7";
        let input = write_input(dir.path(), "ragged.csv", &header_line(), &[ragged]);
        let config = test_config(dir.path(), &input, "KB.csv");
        let err = run(&config).unwrap_err();
        assert!(err.is_malformed_input(), "{err}");
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_header_only_input_writes_header_only_output() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "data.csv", &header_line(), &[]);
        let config = test_config(dir.path(), &input, "KB.csv");

        let summary = run(&config).unwrap();
        assert_eq!(summary.total, 0);

        let (header, rows) = output_rows(&config.output_path);
        assert!(header.ends_with(TARGET_LABEL_COLUMN));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_input_is_an_io_error() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path(), &dir.path().join("absent.csv"), "KB.csv");
        assert!(matches!(run(&config), Err(KbError::Io { .. })));
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_run_with_progress_spinner() {
        let dir = tempdir().unwrap();
        let lines = (0..5)
            .map(|i| record_line(&moderate_record(&i.to_string())))
            .collect::<Vec<_>>();
        let input = write_input(dir.path(), "data.csv", &header_line(), &lines);
        let config = test_config(dir.path(), &input, "KB.csv").with_progress(true);

        let summary = run(&config).unwrap();
        assert_eq!(summary.moderate, 5);

        let (_, rows) = output_rows(&config.output_path);
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn test_custom_delimiter() {
        let dir = tempdir().unwrap();
        let header = header_line().replace(',', ";");
        let line = record_line(&moderate_record("7")).replace(',', ";");
        let input = write_input(dir.path(), "data.csv", &header, &[line]);
        let config = test_config(dir.path(), &input, "KB.csv").with_delimiter(b';');

        run(&config).unwrap();

        let content = fs::read_to_string(&config.output_path).unwrap();
        let row = content.lines().nth(1).unwrap();
        assert!(row.starts_with("7;"));
        assert!(row.ends_with(";1"));
    }

    #[test]
    fn test_parquet_output() {
        let dir = tempdir().unwrap();
        let lines = vec![
            record_line(&scs_record("a")),
            record_line(&moderate_record("b")),
            record_line(&no_risk_record("c")),
        ];
        let input = write_input(dir.path(), "data.csv", &header_line(), &lines);
        let config = test_config(dir.path(), &input, "KB.parquet").with_parallel(false);

        run(&config).unwrap();

        let file = File::open(&config.output_path).unwrap();
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .unwrap()
            .build()
            .unwrap();
        let batches = reader.collect::<Result<Vec<_>, _>>().unwrap();
        let batch = arrow::compute::concat_batches(&batches[0].schema(), &batches).unwrap();

        assert_eq!(batch.num_rows(), 3);
        let ids = batch
            .column(0)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(ids.value(1), "b");
        let scs = batch
            .column(Field::Scs.index())
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(scs.value(0), 41);
        let labels = batch
            .column_by_name(TARGET_LABEL_COLUMN)
            .unwrap()
            .as_any()
            .downcast_ref::<UInt8Array>()
            .unwrap();
        assert_eq!(labels.values().to_vec(), vec![2, 1, 0]);
    }
}

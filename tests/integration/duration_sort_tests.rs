//! View sort integration tests

#[cfg(test)]
mod tests {
    use crate::common::duration_rows;
    use workspace_permissions::PermissionError;
    use workspace_permissions::fields::{
        CellValue, DurationFormat, Field, Row, SortOrder, ViewSort, default_field_types,
        sort_rows,
    };

    fn ids(rows: &[Row]) -> Vec<u64> {
        rows.iter().map(|row| row.id).collect()
    }

    fn view_sort(field: &str, field_type: &str, order: SortOrder) -> ViewSort {
        ViewSort {
            field: field.to_string(),
            field_type: field_type.to_string(),
            order,
            options: Field::default(),
        }
    }

    #[test]
    fn test_duration_sort_ascending() {
        let mut rows = duration_rows("time");
        sort_rows(
            &mut rows,
            &[view_sort("time", "duration", SortOrder::Asc)],
            default_field_types(),
        )
        .unwrap();

        // null, 1.12s, 1m, 2m, 1h, 2h, 1d
        assert_eq!(ids(&rows), vec![4, 7, 2, 1, 6, 5, 3]);
    }

    #[test]
    fn test_duration_sort_descending() {
        let mut rows = duration_rows("time");
        sort_rows(
            &mut rows,
            &[view_sort("time", "duration", SortOrder::Desc)],
            default_field_types(),
        )
        .unwrap();

        assert_eq!(ids(&rows), vec![3, 5, 6, 1, 2, 7, 4]);
    }

    #[test]
    fn test_equal_durations_keep_row_order() {
        let mut rows = vec![
            Row::new(3, "3.00000000000000000000").with_value("time", "1:00"),
            Row::new(1, "1.00000000000000000000").with_value("time", 3600.0),
            Row::new(2, "2.00000000000000000000").with_value("time", "60m"),
        ];
        sort_rows(
            &mut rows,
            &[view_sort("time", "duration", SortOrder::Desc)],
            default_field_types(),
        )
        .unwrap();

        assert_eq!(ids(&rows), vec![1, 2, 3]);
    }

    #[test]
    fn test_multiple_sorts() {
        let mut rows = vec![
            Row::new(1, "1").with_value("team", 2.0).with_value("time", 30.0),
            Row::new(2, "2").with_value("team", 1.0).with_value("time", 90.0),
            Row::new(3, "3").with_value("team", 2.0).with_value("time", 10.0),
            Row::new(4, "4").with_value("team", 1.0).with_value("time", 5.0),
        ];
        let sorts = [
            view_sort("team", "number", SortOrder::Asc),
            view_sort("time", "duration", SortOrder::Desc),
        ];
        sort_rows(&mut rows, &sorts, default_field_types()).unwrap();

        assert_eq!(ids(&rows), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_unknown_field_type() {
        let mut rows = duration_rows("time");
        let result = sort_rows(
            &mut rows,
            &[view_sort("time", "rating", SortOrder::Asc)],
            default_field_types(),
        );

        assert!(matches!(result, Err(PermissionError::UnknownFieldType(ref key)) if key == "rating"));
        // Rows are untouched when the sort cannot be built
        assert_eq!(ids(&rows), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_sorted_rows_render_in_field_format() {
        let mut rows = duration_rows("time");
        sort_rows(
            &mut rows,
            &[view_sort("time", "duration", SortOrder::Asc)],
            default_field_types(),
        )
        .unwrap();

        let field = Field {
            duration_format: DurationFormat::HoursMinutesSeconds,
        };
        let duration = default_field_types().get("duration").unwrap();
        let rendered: Vec<Option<String>> = rows
            .iter()
            .map(|row| duration.format_value(row.value("time"), &field))
            .collect();

        assert_eq!(rendered[0], None);
        assert_eq!(rendered[3].as_deref(), Some("0:02:00"));
        assert_eq!(rendered[6].as_deref(), Some("24:00:00"));
    }

    #[test]
    fn test_missing_column_sorts_as_null() {
        let mut rows = vec![
            Row::new(1, "1").with_value("time", 5.0),
            Row::new(2, "2"),
        ];
        sort_rows(
            &mut rows,
            &[view_sort("time", "duration", SortOrder::Asc)],
            default_field_types(),
        )
        .unwrap();

        assert_eq!(ids(&rows), vec![2, 1]);
        assert_eq!(rows[0].value("time"), &CellValue::Null);
    }
}

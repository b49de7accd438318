use crate::table::Table;

/// Drops every column whose data cells are all `NA`.
///
/// A table without data rows loses every column.
pub fn drop_na_columns(table: &Table) -> Table {
    let keep: Vec<usize> = (0..table.width())
        .filter(|&i| table.rows.iter().any(|row| row[i].is_some()))
        .collect();
    Table {
        header: keep.iter().map(|&i| table.header[i].clone()).collect(),
        rows: table
            .rows
            .iter()
            .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_all_na_column() {
        let t = Table::from_csv_str("a,b,c\n1,NA,x\n2,NA,NA\n").unwrap();
        let out = drop_na_columns(&t);
        assert_eq!(out.header, vec!["a", "c"]);
        assert_eq!(out.to_csv_string(), "a,c\n1,x\n2,NA\n");
    }

    #[test]
    fn pruning_is_idempotent() {
        let t = Table::from_csv_str("a,b,c\nNA,NA,x\nNA,y,NA\n").unwrap();
        let once = drop_na_columns(&t);
        assert_eq!(once.header, vec!["b", "c"]);
        assert_eq!(drop_na_columns(&once), once);
    }

    #[test]
    fn headerless_result_for_empty_table() {
        let t = Table::from_csv_str("a,b\n").unwrap();
        assert!(drop_na_columns(&t).header.is_empty());
    }
}

use dbdo_driver::ResultSet;
use dbdo_types::{Record, Result, RowGroup, ValueType};
use std::collections::HashMap;

/// One row-group per result row, one Record per column, colored purely by
/// the value's type.
pub fn build_query_row_groups(result: &ResultSet) -> Result<Vec<RowGroup>> {
    // Resolved once per distinct type name; expression columns may report a
    // different name from row to row
    let mut resolved: HashMap<&str, ValueType> = HashMap::new();
    let mut groups = Vec::with_capacity(result.len());

    for row in result.labeled_rows() {
        let mut group = RowGroup::with_capacity(row.len());
        for (label, cell) in row {
            let value_type = match resolved.get(cell.type_name.as_str()) {
                Some(value_type) => *value_type,
                None => {
                    let value_type = ValueType::classify(&cell.type_name)?;
                    resolved.insert(cell.type_name.as_str(), value_type);
                    value_type
                }
            };
            group.push(Record::decode(value_type, label, &cell.value));
        }
        groups.push(group);
    }

    Ok(groups)
}

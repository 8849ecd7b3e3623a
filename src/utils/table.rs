use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

pub fn get_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

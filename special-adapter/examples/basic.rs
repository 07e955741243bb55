// Example: header/footer/custom rows and the change stream a list view would apply.
use special_adapter::{Capabilities, Change, SpecialAdapter, SpecialAdapterOptions};

fn main() {
    let capabilities = Capabilities::none().with_header().with_footer().with_empty();
    let opts = SpecialAdapterOptions::new(capabilities).with_on_change(Some(
        |a: &SpecialAdapter<String, &'static str>, change: Change| {
            println!("change={change:?} -> count={}", a.virtual_count());
        },
    ));
    let mut adapter = SpecialAdapter::new(opts);
    println!("empty: {:?}", adapter.layout_state());

    adapter.add_data((0..5).map(|i| format!("row {i}")));
    if let Err(err) = adapter.set_custom_item_layout(vec!["banner", "ad"], vec![0, 3]) {
        eprintln!("{err}");
        return;
    }

    adapter.for_each_row(|position, role| println!("{position:>2}: {role:?}"));

    adapter.remove_data(1);
    adapter.move_data(0, 2);
    println!("after edits: {:?}", adapter.layout_state());
}

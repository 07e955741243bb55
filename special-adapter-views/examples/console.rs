// Example: a toy "list view" that renders rows as strings and reacts to clicks.
use special_adapter_views::{
    Core, Delegates, ItemClick, SpecialListAdapter, custom_row, item_delegate, row_delegate,
};

fn render(adapter: &SpecialListAdapter<String, String>) {
    for position in 0..adapter.virtual_count() {
        match adapter.create_and_bind(position) {
            Ok(holder) => println!(
                "{position:>2} {:<12} span={} {}",
                format!("{:?}", holder.view_type()),
                adapter.span_size(position),
                holder.view()
            ),
            Err(err) => println!("{position:>2} error: {err}"),
        }
    }
    println!();
}

fn main() {
    let delegates = Delegates::new(item_delegate(
        String::new,
        |view: &mut String, item: &String, logical: usize| *view = format!("#{logical} {item}"),
    ))
    .with_header(row_delegate(String::new, |view: &mut String| {
        *view = "== inbox ==".to_string()
    }))
    .with_footer(row_delegate(String::new, |view: &mut String| {
        *view = "-- end --".to_string()
    }))
    .with_empty(row_delegate(String::new, |view: &mut String| {
        *view = "(nothing here, click to load)".to_string()
    }));

    let mut adapter = SpecialListAdapter::new(delegates);
    adapter.set_span_count(2);
    adapter.set_on_empty_click(Some(|core: &mut Core<String, String>, _: usize| {
        core.add_data((1..=4).map(|i| format!("message {i}")));
    }));
    adapter.set_on_item_click(Some(
        |core: &mut Core<String, String>, click: ItemClick| {
            core.remove_data(click.logical);
        },
    ));
    render(&adapter);

    adapter.perform_click(0);
    adapter.core_mut().add_custom_item_layout(
        custom_row(String::new, |view: &mut String, item: Option<&String>, _| {
            *view = format!("[pinned above {}]", item.map_or("the end", String::as_str))
        }),
        2,
    );
    render(&adapter);

    // Clicking the first message removes it.
    adapter.perform_click(1);
    render(&adapter);
}

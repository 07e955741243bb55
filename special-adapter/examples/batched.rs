// Example: coalescing several mutations into one notification pass.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use special_adapter::{Capabilities, Change, SpecialAdapter, SpecialAdapterOptions};

fn main() {
    let delivered = Arc::new(AtomicUsize::new(0));
    let opts = SpecialAdapterOptions::new(Capabilities::none().with_header()).with_on_change(Some({
        let delivered = Arc::clone(&delivered);
        move |_: &SpecialAdapter<u32>, change: Change| {
            delivered.fetch_add(1, Ordering::Relaxed);
            println!("{change:?}");
        }
    }));

    let mut adapter = SpecialAdapter::with_data(opts, vec![1, 2, 3]);
    adapter.batch_update(|a| {
        a.insert_data(4);
        a.update_data(20, 1);
        a.remove_data(0);
    });
    println!(
        "delivered={} count={}",
        delivered.load(Ordering::Relaxed),
        adapter.virtual_count()
    );
}

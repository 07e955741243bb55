use crate::*;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 11
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

type Adapter = SpecialAdapter<&'static str, &'static str>;

fn adapter(capabilities: Capabilities, data: &[&'static str]) -> Adapter {
    SpecialAdapter::with_data(SpecialAdapterOptions::new(capabilities), data.to_vec())
}

fn recorded(
    capabilities: Capabilities,
    data: &[&'static str],
) -> (Adapter, Arc<Mutex<Vec<Change>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let opts = SpecialAdapterOptions::new(capabilities).with_on_change(Some({
        let log = Arc::clone(&log);
        move |_: &Adapter, change: Change| log.lock().unwrap().push(change)
    }));
    (SpecialAdapter::with_data(opts, data.to_vec()), log)
}

fn take(log: &Arc<Mutex<Vec<Change>>>) -> Vec<Change> {
    core::mem::take(&mut *log.lock().unwrap())
}

fn roles(a: &Adapter) -> Vec<Role> {
    let mut out = Vec::new();
    a.for_each_row(|_, role| out.push(role));
    out
}

/// Simulates a list view that caches one role per row and only re-binds rows it is told about.
struct Mirror {
    rows: Vec<Option<Role>>,
}

impl Mirror {
    fn new(a: &Adapter) -> Self {
        Self {
            rows: roles(a).into_iter().map(Some).collect(),
        }
    }

    fn apply(&mut self, a: &Adapter, changes: &[Change]) {
        for change in changes {
            match *change {
                Change::Reset => {
                    self.rows = vec![None; a.virtual_count()];
                }
                Change::Inserted { start, count } => {
                    assert!(start <= self.rows.len(), "insert past end: {change:?}");
                    for _ in 0..count {
                        self.rows.insert(start, None);
                    }
                }
                Change::Removed { start, count } => {
                    assert!(start + count <= self.rows.len(), "remove past end: {change:?}");
                    self.rows.drain(start..start + count);
                }
                Change::Changed { start, count } => {
                    assert!(start + count <= self.rows.len(), "change past end: {change:?}");
                    for row in &mut self.rows[start..start + count] {
                        *row = None;
                    }
                }
                Change::Moved { from, to } => {
                    let row = self.rows.remove(from);
                    self.rows.insert(to, row);
                }
            }
        }

        let current = roles(a);
        assert_eq!(self.rows.len(), current.len(), "row count after {changes:?}");
        for (i, (cached, role)) in self.rows.iter_mut().zip(current).enumerate() {
            match cached.as_ref() {
                Some(&seen) => assert_eq!(seen, role, "stale row {i} after {changes:?}"),
                None => *cached = Some(role),
            }
        }
    }
}

fn expected_count(caps: Capabilities, len: usize, custom: usize, collapsed: bool) -> usize {
    if collapsed {
        return 1;
    }
    usize::from(caps.refresh) + usize::from(caps.header) + usize::from(caps.footer) + custom + len
}

fn all_capabilities() -> Vec<Capabilities> {
    let mut out = Vec::new();
    for bits in 0..16u8 {
        out.push(Capabilities {
            refresh: bits & 1 != 0,
            header: bits & 2 != 0,
            footer: bits & 4 != 0,
            empty: bits & 8 != 0,
        });
    }
    out
}

#[test]
fn header_footer_scenario() {
    let a = adapter(Capabilities::none().with_header().with_footer(), &["a", "b", "c"]);
    assert_eq!(a.virtual_count(), 5);
    assert_eq!(a.role_at(0), Some(Role::Header));
    assert_eq!(a.role_at(1), Some(Role::Item { logical: 0 }));
    assert_eq!(a.role_at(2), Some(Role::Item { logical: 1 }));
    assert_eq!(a.role_at(3), Some(Role::Item { logical: 2 }));
    assert_eq!(a.role_at(4), Some(Role::Footer));
    assert_eq!(a.role_at(5), None);
    assert_eq!(a.header_position(), Some(0));
    assert_eq!(a.footer_position(), Some(4));
    assert_eq!(a.refresh_position(), None);
}

#[test]
fn refresh_precedes_header() {
    let a = adapter(
        Capabilities::none().with_refresh().with_header().with_footer(),
        &["a"],
    );
    assert_eq!(a.refresh_position(), Some(0));
    assert_eq!(a.header_position(), Some(1));
    assert_eq!(a.role_at(2), Some(Role::Item { logical: 0 }));
    assert_eq!(a.footer_position(), Some(3));
    assert_eq!(a.logical_to_virtual(0), Some(2));
}

#[test]
fn empty_scenario() {
    let (mut a, log) = recorded(Capabilities::none().with_empty(), &[]);
    assert_eq!(a.virtual_count(), 1);
    assert_eq!(a.role_at(0), Some(Role::Empty));
    assert_eq!(a.empty_position(), Some(0));

    a.insert_data("x");
    assert_eq!(a.virtual_count(), 1);
    assert_eq!(a.role_at(0), Some(Role::Item { logical: 0 }));
    assert_eq!(a.empty_position(), None);
    assert_eq!(take(&log), vec![Change::Reset]);
}

#[test]
fn empty_state_suppresses_every_other_row() {
    let mut a = adapter(
        Capabilities::none()
            .with_refresh()
            .with_header()
            .with_footer()
            .with_empty(),
        &[],
    );
    assert_eq!(a.add_custom_item_layout("ad", 0), None);
    assert_eq!(a.virtual_count(), 1);
    assert_eq!(a.header_position(), None);
    assert_eq!(a.footer_position(), None);
    assert_eq!(a.refresh_position(), None);
    assert!(a.custom_positions().is_empty());
    assert_eq!(a.custom_count(), 1);

    a.insert_data("x");
    assert_eq!(a.virtual_count(), 5);
    assert_eq!(a.custom_positions(), vec![2]);
    assert_eq!(a.role_at(3), Some(Role::Item { logical: 0 }));
}

#[test]
fn missing_empty_capability_keeps_rows() {
    let a = adapter(Capabilities::none().with_header().with_footer(), &[]);
    assert!(a.is_empty_state());
    assert_eq!(a.virtual_count(), 2);
    assert_eq!(a.role_at(0), Some(Role::Header));
    assert_eq!(a.role_at(1), Some(Role::Footer));
}

#[test]
fn remove_out_of_range_is_a_silent_noop() {
    let (mut a, log) = recorded(Capabilities::none().with_header(), &["a", "b", "c"]);
    assert_eq!(a.remove_data(5), None);
    assert_eq!(a.data(), &["a", "b", "c"]);
    assert!(take(&log).is_empty());

    assert_eq!(a.update_data("z", 3), None);
    assert!(!a.move_data(0, 3));
    assert!(take(&log).is_empty());
}

#[test]
fn custom_layout_mismatch_leaves_registry_untouched() {
    let (mut a, log) = recorded(Capabilities::none().with_header(), &["a", "b", "c"]);
    a.set_custom_item_layout(vec!["one"], vec![1]).unwrap();
    take(&log);
    let before = a.layout_state();

    let err = a
        .set_custom_item_layout(vec!["x", "y"], vec![0])
        .unwrap_err();
    assert_eq!(
        err,
        Error::CustomLayoutMismatch {
            providers: 2,
            positions: 1
        }
    );
    assert_eq!(a.layout_state(), before);
    assert!(take(&log).is_empty());
}

#[test]
fn custom_rows_at_same_anchor_keep_registration_order() {
    let mut a = adapter(Capabilities::none().with_header(), &["d0", "d1", "d2", "d3"]);
    let data_row_2 = a.logical_to_virtual(2).unwrap();
    a.set_custom_item_layout(vec!["first", "second", "third"], vec![0, 2, 2])
        .unwrap();

    let positions = a.custom_positions();
    assert_eq!(positions, vec![1, 4, 5]);

    let providers: Vec<&str> = positions
        .iter()
        .map(|&p| match a.role_at(p) {
            Some(Role::Custom { id, .. }) => *a.custom_provider(id).unwrap(),
            other => panic!("expected custom row at {p}, got {other:?}"),
        })
        .collect();
    assert_eq!(providers, vec!["first", "second", "third"]);

    let shifted = a.logical_to_virtual(2).unwrap();
    assert_eq!(shifted, data_row_2 + 3);
    assert!(positions[1] < shifted && positions[2] < shifted);
    assert_eq!(
        a.role_at(4),
        Some(Role::Custom { id: 1, anchor: 2 })
    );
}

#[test]
fn custom_anchor_past_end_is_clamped_to_append() {
    let mut a = adapter(Capabilities::none().with_footer(), &["a", "b"]);
    let position = a.add_custom_item_layout("tail", 10).unwrap();
    assert_eq!(position, 2);
    assert_eq!(a.custom_anchor(0), Some(2));
    assert_eq!(a.role_at(3), Some(Role::Footer));
}

#[test]
fn add_then_remove_custom_row_restores_mapping() {
    let caps = Capabilities::none().with_refresh().with_header().with_footer();
    let mut a = adapter(caps, &["a", "b", "c", "d", "e"]);
    a.set_custom_item_layout(vec!["x"], vec![3]).unwrap();

    for anchor in 0..=5 {
        let count = a.virtual_count();
        let mapping: Vec<Option<usize>> = (0..5).map(|l| a.logical_to_virtual(l)).collect();

        let position = a.add_custom_item_layout("tmp", anchor).unwrap();
        assert_eq!(a.virtual_count(), count + 1);
        assert_eq!(a.remove_custom_item_layout(position), Some("tmp"));

        assert_eq!(a.virtual_count(), count);
        let after: Vec<Option<usize>> = (0..5).map(|l| a.logical_to_virtual(l)).collect();
        assert_eq!(after, mapping, "anchor {anchor}");
    }
}

#[test]
fn remove_custom_at_non_custom_position_is_none() {
    let mut a = adapter(Capabilities::none().with_header(), &["a"]);
    a.add_custom_item_layout("x", 0);
    assert_eq!(a.remove_custom_item_layout(0), None);
    assert_eq!(a.remove_custom_item_layout(2), None);
    assert_eq!(a.custom_count(), 1);
}

#[test]
fn count_formula_holds_for_every_capability_set() {
    for caps in all_capabilities() {
        for len in 0..5usize {
            for custom in 0..3usize {
                let data: Vec<&'static str> = (0..len).map(|_| "d").collect();
                let mut a = adapter(caps, &data);
                let anchors: Vec<usize> = (0..custom).map(|i| i * 2).collect();
                a.set_custom_item_layout(vec!["c"; custom], anchors).unwrap();

                let collapsed = caps.empty && len == 0;
                assert_eq!(
                    a.virtual_count(),
                    expected_count(caps, len, custom, collapsed),
                    "caps={caps:?} len={len} custom={custom}"
                );
                assert_eq!(roles(&a).len(), a.virtual_count());
            }
        }
    }
}

#[test]
fn item_rows_round_trip() {
    let caps = Capabilities::none().with_refresh().with_header().with_footer();
    let mut a = adapter(caps, &["a", "b", "c", "d"]);
    a.set_custom_item_layout(vec!["x", "y", "z", "w"], vec![0, 2, 2, 4])
        .unwrap();

    let mut items = 0;
    for p in 0..a.virtual_count() {
        let role = a.role_at(p).unwrap();
        if let Some(logical) = a.virtual_to_logical(p) {
            items += 1;
            assert_eq!(role, Role::Item { logical });
            assert_eq!(a.logical_to_virtual(logical), Some(p));
        } else {
            assert!(!role.is_item());
        }
    }
    assert_eq!(items, 4);
}

#[test]
fn for_each_row_matches_role_at() {
    let mut a = adapter(Capabilities::none().with_header().with_footer(), &["a", "b", "c"]);
    a.set_custom_item_layout(vec!["x", "y"], vec![3, 1]).unwrap();
    let mut walked = Vec::new();
    a.for_each_row(|p, role| walked.push((p, role)));
    let queried: Vec<(usize, Role)> = (0..a.virtual_count())
        .map(|p| (p, a.role_at(p).unwrap()))
        .collect();
    assert_eq!(walked, queried);
}

#[test]
fn insert_reports_insert_then_trailing_change() {
    let (mut a, log) = recorded(Capabilities::none().with_header().with_footer(), &["a", "b"]);
    a.insert_data_at("x", 1);
    assert_eq!(
        take(&log),
        vec![
            Change::Inserted { start: 2, count: 1 },
            Change::Changed { start: 3, count: 2 },
        ]
    );
    assert_eq!(a.data(), &["a", "x", "b"]);

    a.insert_data("y");
    assert_eq!(
        take(&log),
        vec![
            Change::Inserted { start: 4, count: 1 },
            Change::Changed { start: 5, count: 1 },
        ]
    );
}

#[test]
fn first_insert_resets() {
    let (mut a, log) = recorded(Capabilities::none().with_header(), &[]);
    a.insert_data("a");
    assert_eq!(take(&log), vec![Change::Reset]);
}

#[test]
fn remove_reports_removal_and_enters_empty_state() {
    let (mut a, log) = recorded(Capabilities::none().with_header().with_empty(), &["a", "b"]);
    assert_eq!(a.remove_data(0), Some("a"));
    assert_eq!(
        take(&log),
        vec![
            Change::Removed { start: 1, count: 1 },
            Change::Changed { start: 1, count: 1 },
        ]
    );
    assert!(!a.is_empty_state());

    assert_eq!(a.remove_data(0), Some("b"));
    assert!(a.is_empty_state());
    assert_eq!(take(&log), vec![Change::Reset]);
    assert_eq!(a.role_at(0), Some(Role::Empty));
}

#[test]
fn remove_all_with_and_without_custom_rows() {
    let (mut a, log) = recorded(Capabilities::none().with_header().with_footer(), &["a", "b", "c"]);
    a.set_custom_item_layout(vec!["x", "y"], vec![1, 3]).unwrap();
    take(&log);

    a.remove_all(false);
    assert_eq!(
        take(&log),
        vec![
            Change::Removed { start: 1, count: 5 },
            Change::Inserted { start: 1, count: 2 },
        ]
    );
    assert_eq!(a.custom_positions(), vec![1, 2]);
    assert_eq!(a.custom_anchor(0), Some(0));
    assert_eq!(a.virtual_count(), 4);

    a.remove_all(true);
    assert_eq!(take(&log), vec![Change::Removed { start: 1, count: 2 }]);
    assert_eq!(a.virtual_count(), 2);
    assert!(a.is_empty_state());
}

#[test]
fn remove_all_notifies_empty_row() {
    let (mut a, log) = recorded(Capabilities::none().with_header().with_empty(), &["a", "b"]);
    a.remove_all(true);
    assert_eq!(
        take(&log),
        vec![
            Change::Removed { start: 0, count: 3 },
            Change::Inserted { start: 0, count: 1 },
        ]
    );
    a.remove_all(true);
    assert_eq!(take(&log), vec![Change::Changed { start: 0, count: 1 }]);
}

#[test]
fn bulk_add_is_one_range() {
    let (mut a, log) = recorded(Capabilities::none().with_footer(), &["a"]);
    a.add_data(["b", "c", "d"]);
    assert_eq!(
        take(&log),
        vec![
            Change::Inserted { start: 1, count: 3 },
            Change::Changed { start: 4, count: 1 },
        ]
    );
    a.add_data_at(["z"], 0);
    assert_eq!(a.data(), &["z", "a", "b", "c", "d"]);
    a.add_data(Vec::new());
    assert_eq!(take(&log).len(), 2);
}

#[test]
fn update_and_move() {
    let (mut a, log) = recorded(Capabilities::none().with_header(), &["a", "b", "c", "d"]);
    assert_eq!(a.update_data("B", 1), Some("b"));
    assert_eq!(take(&log), vec![Change::Changed { start: 2, count: 1 }]);

    assert!(a.move_data(0, 3));
    assert_eq!(a.data(), &["d", "B", "c", "a"]);
    assert_eq!(
        take(&log),
        vec![
            Change::Moved { from: 1, to: 4 },
            Change::Changed { start: 1, count: 4 },
        ]
    );
}

#[test]
fn init_data_shrinking_and_growing() {
    let (mut a, log) = recorded(Capabilities::none().with_header(), &["a", "b", "c"]);
    a.init_data(vec!["x"]);
    assert_eq!(
        take(&log),
        vec![
            Change::Removed { start: 2, count: 2 },
            Change::Changed { start: 0, count: 2 },
        ]
    );
    a.init_data(vec!["x", "y", "z"]);
    assert_eq!(
        take(&log),
        vec![
            Change::Changed { start: 0, count: 2 },
            Change::Inserted { start: 2, count: 2 },
        ]
    );
}

#[test]
fn set_custom_layout_replaces_positions() {
    let (mut a, log) = recorded(Capabilities::none().with_header(), &["a", "b", "c"]);
    a.set_custom_item_layout(vec!["x"], vec![2]).unwrap();
    assert_eq!(
        take(&log),
        vec![
            Change::Inserted { start: 3, count: 1 },
            Change::Changed { start: 3, count: 2 },
        ]
    );
    a.set_custom_item_layout(vec!["y", "z"], vec![0, 3]).unwrap();
    assert_eq!(
        take(&log),
        vec![
            Change::Removed { start: 3, count: 1 },
            Change::Inserted { start: 1, count: 1 },
            Change::Inserted { start: 5, count: 1 },
            Change::Changed { start: 1, count: 5 },
        ]
    );
    assert_eq!(a.custom_positions(), vec![1, 5]);
}

#[test]
fn removing_last_item_regroups_tail_custom_rows() {
    let mut a = adapter(Capabilities::none().with_footer(), &["a", "b"]);
    a.set_custom_item_layout(vec!["tail", "mid"], vec![2, 1]).unwrap();
    let mut mirror = Mirror::new(&a);
    let log = Arc::new(Mutex::new(Vec::new()));
    a.set_on_change(Some({
        let log = Arc::clone(&log);
        move |_: &Adapter, change: Change| log.lock().unwrap().push(change)
    }));

    assert_eq!(a.remove_data(1), Some("b"));
    assert_eq!(a.custom_anchor(0), Some(1));
    mirror.apply(&a, &take(&log));
    // "tail" registered first, so it now leads the group at anchor 1.
    assert_eq!(a.role_at(1), Some(Role::Custom { id: 0, anchor: 1 }));
    assert_eq!(a.role_at(2), Some(Role::Custom { id: 1, anchor: 1 }));
}

#[test]
fn show_empty_collapses_until_next_insert() {
    let (mut a, log) = recorded(Capabilities::none().with_header().with_empty(), &["a"]);
    a.show_empty();
    assert_eq!(take(&log), vec![Change::Reset]);
    assert_eq!(a.virtual_count(), 1);
    assert_eq!(a.logical_to_virtual(0), None);

    assert_eq!(a.update_data("b", 0), Some("a"));
    assert!(take(&log).is_empty());

    a.insert_data("c");
    assert_eq!(take(&log), vec![Change::Reset]);
    assert_eq!(a.virtual_count(), 3);
}

#[test]
fn notifications_observe_updated_state() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let opts = SpecialAdapterOptions::new(Capabilities::none().with_footer()).with_on_change(Some({
        let seen = Arc::clone(&seen);
        move |a: &SpecialAdapter<&'static str>, _: Change| {
            seen.lock().unwrap().push((a.virtual_count(), a.item_count()));
        }
    }));
    let mut a = SpecialAdapter::with_data(opts, vec!["a"]);
    a.insert_data("b");
    let seen = seen.lock().unwrap();
    assert!(!seen.is_empty());
    assert!(seen.iter().all(|&(count, len)| count == 3 && len == 2));
}

#[test]
fn batch_update_delivers_once_in_order() {
    let (mut a, log) = recorded(Capabilities::none(), &["a"]);
    a.batch_update(|a| {
        a.insert_data("b");
        a.update_data("A", 0);
    });
    assert_eq!(
        take(&log),
        vec![
            Change::Inserted { start: 1, count: 1 },
            Change::Changed { start: 0, count: 1 },
        ]
    );

    a.batch_update(|a| {
        a.remove_all(true);
        a.batch_update(|a| a.insert_data("c"));
        a.insert_data("d");
    });
    assert_eq!(take(&log), vec![Change::Reset]);
    assert_eq!(a.data(), &["c", "d"]);
}

#[test]
fn layout_state_snapshot() {
    let mut a = adapter(
        Capabilities::none().with_refresh().with_header().with_footer(),
        &["a", "b"],
    );
    a.add_custom_item_layout("x", 1);
    assert_eq!(
        a.layout_state(),
        LayoutState {
            count: 6,
            item_count: 2,
            refresh: Some(0),
            header: Some(1),
            footer: Some(5),
            empty: None,
            custom_positions: vec![3],
        }
    );
}

#[test]
fn error_messages_name_the_problem() {
    let msg = alloc::format!("{}", Error::MissingCapability(RowKind::Header));
    assert!(msg.contains("Header"));
    let msg: String = alloc::format!(
        "{}",
        Error::CustomLayoutMismatch {
            providers: 2,
            positions: 1
        }
    );
    assert!(msg.contains("providers=2"));
    let msg = alloc::format!(
        "{}",
        Error::CustomViewTypeMismatch {
            expected: 1,
            found: 0
        }
    );
    assert!(msg.contains("custom view type 1"));
}

#[test]
fn randomized_mutations_keep_list_view_consistent() {
    const WORDS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];
    const PROVIDERS: [&str; 3] = ["p", "q", "r"];

    for seed in 0..32u64 {
        let mut rng = Lcg::new(seed);
        let caps = all_capabilities()[rng.gen_range_usize(0, 16)];
        let (mut a, log) = recorded(caps, &[]);
        let mut mirror = Mirror::new(&a);

        for _ in 0..200 {
            let len = a.item_count();
            let word = WORDS[rng.gen_range_usize(0, WORDS.len())];
            match rng.gen_range_usize(0, 12) {
                0 => a.insert_data(word),
                1 => a.insert_data_at(word, rng.gen_range_usize(0, len + 2)),
                2 => {
                    a.remove_data(rng.gen_range_usize(0, len + 2));
                }
                3 => {
                    if rng.gen_range_usize(0, 4) == 0 {
                        a.remove_all(rng.gen_bool());
                    }
                }
                4 => {
                    let n = rng.gen_range_usize(0, 4);
                    a.add_data_at(
                        (0..n).map(|i| WORDS[i]),
                        rng.gen_range_usize(0, len + 2),
                    );
                }
                5 => {
                    a.update_data(word, rng.gen_range_usize(0, len + 1));
                }
                6 => {
                    let from = rng.gen_range_usize(0, len + 1);
                    let to = rng.gen_range_usize(0, len + 1);
                    a.move_data(from, to);
                }
                7 => {
                    let n = rng.gen_range_usize(0, 4);
                    let providers = (0..n).map(|i| PROVIDERS[i % 3]).collect();
                    let anchors = (0..n).map(|_| rng.gen_range_usize(0, len + 3)).collect();
                    a.set_custom_item_layout(providers, anchors).unwrap();
                }
                8 => {
                    a.add_custom_item_layout(word, rng.gen_range_usize(0, len + 3));
                }
                9 => {
                    let positions = a.custom_positions();
                    if !positions.is_empty() {
                        let p = positions[rng.gen_range_usize(0, positions.len())];
                        assert!(a.remove_custom_item_layout(p).is_some());
                    }
                }
                10 => {
                    let n = rng.gen_range_usize(0, 5);
                    a.init_data((0..n).map(|i| WORDS[i]).collect());
                }
                _ => {
                    if rng.gen_range_usize(0, 8) == 0 {
                        a.show_empty();
                    }
                }
            }

            mirror.apply(&a, &take(&log));

            let collapsed = caps.empty && a.is_empty_state();
            assert_eq!(
                a.virtual_count(),
                expected_count(caps, a.item_count(), a.custom_count(), collapsed)
            );
            for logical in 0..a.item_count() {
                if let Some(p) = a.logical_to_virtual(logical) {
                    assert_eq!(a.virtual_to_logical(p), Some(logical));
                }
            }
            for id in 0..64 {
                if let Some(anchor) = a.custom_anchor(id) {
                    assert!(anchor <= a.item_count());
                }
            }
        }
    }
}

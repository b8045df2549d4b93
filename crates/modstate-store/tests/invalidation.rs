//! Cache invalidation tests for the store.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use modstate_model::{AccessError, Direct, Getter, GetterContext, Module, fetch};
use modstate_store::{Store, StoreOptions};
use proptest::prelude::*;

#[derive(Debug, Clone, Default)]
struct Root {
    numbers: Numbers,
}

#[derive(Debug, Clone, Default)]
struct Numbers {
    values: Vec<i64>,
}

struct NumbersModule;

impl Module for NumbersModule {
    type Root = Root;
    type State = Numbers;
    const NAME: &'static str = "numbers";

    fn state(root: &Root) -> &Numbers {
        &root.numbers
    }
}

struct Sum;

impl Getter for Sum {
    type Module = NumbersModule;
    type Shape = Direct<i64>;
    const NAME: &'static str = "sum";

    fn compute(cx: &GetterContext<'_, NumbersModule>) -> Result<i64, AccessError> {
        Ok(cx.state().values.iter().sum())
    }
}

struct Positives;

impl Getter for Positives {
    type Module = NumbersModule;
    type Shape = Direct<Vec<i64>>;
    const NAME: &'static str = "positives";

    fn compute(cx: &GetterContext<'_, NumbersModule>) -> Result<Vec<i64>, AccessError> {
        Ok(cx
            .state()
            .values
            .iter()
            .copied()
            .filter(|v| *v > 0)
            .collect())
    }
}

fn numbers_store(values: Vec<i64>, options: StoreOptions) -> Store<Root> {
    let mut builder = Store::builder(Root {
        numbers: Numbers { values },
    })
    .with_options(options);
    builder
        .module::<NumbersModule>()
        .unwrap()
        .getter::<Sum>()
        .unwrap()
        .getter::<Positives>()
        .unwrap();
    builder.build()
}

#[derive(Debug, Clone)]
enum Edit {
    Push(i64),
    Pop,
    Negate(usize),
    Replace(Vec<i64>),
}

fn apply(edit: &Edit, values: &mut Vec<i64>) {
    match edit {
        Edit::Push(v) => values.push(*v),
        Edit::Pop => {
            values.pop();
        }
        Edit::Negate(index) => {
            if !values.is_empty() {
                let i = index % values.len();
                values[i] = -values[i];
            }
        }
        Edit::Replace(new) => *values = new.clone(),
    }
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (-100i64..100).prop_map(Edit::Push),
        Just(Edit::Pop),
        any::<usize>().prop_map(Edit::Negate),
        prop::collection::vec(-100i64..100, 0..8).prop_map(Edit::Replace),
    ]
}

proptest! {
    #[test]
    fn cached_reads_track_every_edit(
        initial in prop::collection::vec(-100i64..100, 0..8),
        edits in prop::collection::vec(edit_strategy(), 0..16),
    ) {
        let cached = numbers_store(initial.clone(), StoreOptions::default());
        let mut shadow = initial;
        for edit in &edits {
            // Warm the cache so the edit has something to invalidate.
            fetch::<Sum>(&cached).unwrap();
            cached.mutate(|root| apply(edit, &mut root.numbers.values));
            apply(edit, &mut shadow);

            let sum = fetch::<Sum>(&cached).unwrap();
            let positives = fetch::<Positives>(&cached).unwrap();
            prop_assert_eq!(*sum, shadow.iter().sum::<i64>());
            let expected_positives = shadow.iter().copied().filter(|v| *v > 0).collect::<Vec<_>>();
            prop_assert_eq!(
                positives.as_slice(),
                expected_positives.as_slice()
            );
        }
        prop_assert_eq!(cached.version(), edits.len() as u64);
    }

    #[test]
    fn cached_and_uncached_agree(values in prop::collection::vec(-100i64..100, 0..16)) {
        let cached = numbers_store(values.clone(), StoreOptions::default());
        let uncached = numbers_store(values, StoreOptions::uncached());
        prop_assert_eq!(fetch::<Positives>(&cached).unwrap(), fetch::<Positives>(&uncached).unwrap());
        prop_assert_eq!(fetch::<Sum>(&cached).unwrap(), fetch::<Sum>(&uncached).unwrap());
    }
}

#[test]
fn replace_state_resets_values() {
    let store = numbers_store(vec![1, 2, 3], StoreOptions::default());
    assert_eq!(*fetch::<Sum>(&store).unwrap(), 6);
    store.replace_state(Root::default());
    assert_eq!(*fetch::<Sum>(&store).unwrap(), 0);
    assert!(fetch::<Positives>(&store).unwrap().is_empty());
    store.with_root(|root| assert!(root.numbers.values.is_empty()));
}

#[test]
fn write_that_panics_midway_is_not_hidden_by_the_cache() {
    let store = numbers_store(vec![1, 2, 3], StoreOptions::default());
    assert_eq!(*fetch::<Sum>(&store).unwrap(), 6);

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        store.mutate(|root| {
            root.numbers.values.push(100);
            if root.numbers.values.len() > 3 {
                panic!("edit interrupted");
            }
        });
    }));
    assert!(result.is_err());

    let state_sum: i64 = store.with_root(|root| root.numbers.values.iter().sum());
    assert_eq!(state_sum, 106);
    assert_eq!(*fetch::<Sum>(&store).unwrap(), state_sum);
    assert_eq!(store.version(), 1);
}

#[test]
fn readers_tolerate_concurrent_writes() {
    let store = Arc::new(numbers_store(vec![1; 4], StoreOptions::default()));
    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for _ in 0..100 {
                store.mutate(|root| root.numbers.values.push(1));
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..100 {
                    // Every state is a run of ones, so the sum equals the length.
                    let sum = *fetch::<Sum>(&*store).unwrap();
                    let len = store.with_root(|root| root.numbers.values.len()) as i64;
                    assert!(sum >= 4 && sum <= len);
                }
            })
        })
        .collect();
    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(*fetch::<Sum>(&*store).unwrap(), 104);
}

//! Then steps for task ordering BDD scenarios.

use super::world::{TaskOrderingWorld, task_id};
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::then;

fn parse_ranks(expected: &str) -> Result<Vec<(String, u32)>, eyre::Report> {
    expected
        .split(',')
        .map(|entry| {
            let (id, order) = entry
                .trim()
                .split_once(':')
                .ok_or_else(|| eyre!("expected id:order, found '{entry}'"))?;
            let rank = order
                .parse::<u32>()
                .wrap_err_with(|| format!("invalid order in '{entry}'"))?;
            Ok((id.to_owned(), rank))
        })
        .collect()
}

#[then(r#"the stored ranks are "{expected}""#)]
fn stored_ranks_are(world: &TaskOrderingWorld, expected: String) -> Result<(), eyre::Report> {
    let wanted = parse_ranks(&expected)?;
    let actual: Vec<(String, u32)> = world
        .store
        .tasks()
        .iter()
        .map(|task| (task.id().as_str().to_owned(), task.order().value()))
        .collect();
    if actual != wanted {
        return Err(eyre!("expected ranks {wanted:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"task "{id}" is completed at order {order:u32}"#)]
fn task_is_completed_at(
    world: &TaskOrderingWorld,
    id: String,
    order: u32,
) -> Result<(), eyre::Report> {
    let task = world
        .store
        .get(&task_id(&id)?)
        .ok_or_else(|| eyre!("missing task {id}"))?;
    if !task.is_completed() {
        return Err(eyre!("task {id} is not completed"));
    }
    if task.order().value() != order {
        return Err(eyre!(
            "expected task {id} at order {order}, found {}",
            task.order()
        ));
    }
    Ok(())
}

#[then(r#"the display order is "{expected}""#)]
fn display_order_is(world: &TaskOrderingWorld, expected: String) -> Result<(), eyre::Report> {
    let wanted: Vec<&str> = expected.split(',').map(str::trim).collect();
    let display = world.store.display();
    let actual: Vec<&str> = display.iter().map(|task| task.id().as_str()).collect();
    if actual != wanted {
        return Err(eyre!("expected display {wanted:?}, found {actual:?}"));
    }
    Ok(())
}

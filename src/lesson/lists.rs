//! List walkthrough: indexing, mutation, ordering, and slicing.

use tracing::debug;

use super::{Lesson, Walk};
use crate::error::LessonResult;
use crate::sequence::TokenList;
use crate::text;

pub struct ListsLesson;

impl Lesson for ListsLesson {
    fn name(&self) -> &'static str {
        "lists"
    }

    fn summary(&self) -> &'static str {
        "Index, mutate, sort, and slice lists of brand and player names"
    }

    fn run(&self, walk: &mut Walk<'_>) -> LessonResult<()> {
        bicycles(walk)?;
        motorcycles(walk)?;
        players(walk)
    }
}

fn bicycles(walk: &mut Walk<'_>) -> LessonResult<()> {
    let bicycles = TokenList::new(["trek", "cannondale", "redline", "specialized"]);
    walk.emit(&bicycles);

    if let Some(first) = walk.check("read bicycles[0]", bicycles.get(0))? {
        walk.emit(first);
        walk.emit(text::title_case(first));
    }

    if let Some(second) = walk.check("read bicycles[1]", bicycles.get(1))? {
        walk.emit(format!("My first bike was a {}.", text::title_case(second)));
    }

    Ok(())
}

fn motorcycles(walk: &mut Walk<'_>) -> LessonResult<()> {
    let mut motorcycles = TokenList::new(["honda", "yamaha", "suzuki"]);
    walk.emit(&motorcycles);

    walk.check("assign ducati to index 0", motorcycles.set(0, "ducati"))?;
    walk.emit(&motorcycles);

    motorcycles.append("davidson");
    walk.emit(&motorcycles);

    motorcycles.insert(0, "harley");
    walk.emit(&motorcycles);

    walk.check("delete index 0", motorcycles.delete(0))?;
    walk.emit(&motorcycles);

    if let Some(last) = walk.check("pop last", motorcycles.pop())? {
        walk.emit(last);
    }
    walk.emit(&motorcycles);

    if let Some(first) = walk.check("pop index 0", motorcycles.pop_at(0))? {
        walk.emit(first);
    }
    walk.emit(&motorcycles);

    // honda was replaced by ducati earlier, so this fails
    walk.check("remove honda", motorcycles.remove("honda"))?;
    walk.emit(&motorcycles);

    motorcycles.sort();
    walk.emit(&motorcycles);

    motorcycles.sort_desc();
    walk.emit(&motorcycles);

    walk.emit(motorcycles.sorted());

    motorcycles.reverse();
    walk.emit(&motorcycles);

    let count = motorcycles.len();
    debug!(count, "motorcycle count");

    if let Some(last) = walk.check("read index -1", motorcycles.get(-1))? {
        walk.emit(last);
    }

    Ok(())
}

fn players(walk: &mut Walk<'_>) -> LessonResult<()> {
    let players = TokenList::new(["kyle", "mike", "corey"]);
    walk.emit(players.slice(Some(0), Some(2)));
    walk.emit(players.slice(None, Some(2)));
    walk.emit(players.slice(Some(-1), None));
    Ok(())
}

//! String walkthrough: case changes, interpolation, escapes, trimming.

use super::{Lesson, Walk};
use crate::error::LessonResult;
use crate::text;

pub struct StringsLesson;

impl Lesson for StringsLesson {
    fn name(&self) -> &'static str {
        "strings"
    }

    fn summary(&self) -> &'static str {
        "Change case, interpolate names, print escapes, and trim whitespace"
    }

    fn run(&self, walk: &mut Walk<'_>) -> LessonResult<()> {
        let name = "kyle david";
        walk.emit(text::title_case(name));
        walk.emit(text::upper(name));
        walk.emit(text::lower(name));

        let first_name = "kyle";
        let last_name = "schneiderlochner";
        let full_name = format!("{first_name} {last_name}");
        walk.emit(&full_name);
        walk.emit(format!("Hello {}!", text::title_case(&full_name)));

        walk.emit("\t Python");
        walk.emit("Python\nis \nfun!");

        let language = " Java ";
        walk.emit(language);
        walk.emit(text::rstrip(language));
        walk.emit(text::lstrip(language));
        walk.emit(text::strip(language));

        Ok(())
    }
}

#[cfg(test)]
mod common;

#[cfg(test)]
mod submit_tests;

#[cfg(test)]
mod draft_submit_tests;

pub mod json;
pub mod table;

use crate::store::Snippet;

pub fn print_list(snippets: &[Snippet], json_output: bool) {
    if json_output {
        println!("{}", json::render(snippets));
    } else {
        print!("{}", table::render(snippets));
    }
}

pub fn print_snippet(snippet: &Snippet, json_output: bool) {
    if json_output {
        println!("{}", json::render_one(snippet));
    } else {
        print!("{}", table::detail(snippet));
    }
}

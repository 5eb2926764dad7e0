// Training Registry - command shell
//
// Thin view layer over the engine: reads one command per line, calls
// into the Registry, and prints the outcome. Every rule lives in the
// library; this binary only parses lines and renders results.

use anyhow::Result;
use std::io::{self, BufRead, Write};

use training_registry::{Registry, SubjectSelection, VERSION};

fn main() -> Result<()> {
    println!("🎓 Training Registry v{VERSION}");
    println!("Type 'help' for commands, 'quit' to exit.\n");

    let mut registry = Registry::new();
    let mut selection = SubjectSelection::new();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        dispatch(&mut registry, &mut selection, line);
    }

    let c = registry.counts();
    println!(
        "\n✅ Session closed ({} entities, in-memory only)",
        c.subjects + c.courses + c.batches + c.students
    );
    Ok(())
}

fn dispatch(registry: &mut Registry, selection: &mut SubjectSelection, line: &str) {
    let (command, rest) = match line.split_once(' ') {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match command {
        "help" => print_help(),
        "counts" => {
            let c = registry.counts();
            println!(
                "subjects: {}  courses: {}  batches: {}  students: {}",
                c.subjects, c.courses, c.batches, c.students
            );
        }
        "dump" => match serde_json::to_string_pretty(&registry) {
            Ok(json) => println!("{json}"),
            Err(e) => println!("❌ {e}"),
        },

        "add-subject" => report(registry.add_subject(rest).map(|s| format!("subject {} ({})", s.name, s.id))),
        "select" => {
            selection.toggle(rest);
            println!("selected: {}", selection.ids().join(", "));
        }
        "add-course" => {
            let result = registry.add_course(rest, selection.ids().to_vec());
            if result.is_ok() {
                selection.clear();
            }
            report(result.map(|c| format!("course {} ({})", c.name, c.id)));
        }
        "add-batch" => {
            // add-batch COURSE_ID START END NAME...
            let parts: Vec<&str> = rest.splitn(4, ' ').collect();
            if parts.len() < 4 {
                println!("usage: add-batch COURSE_ID START END NAME");
                return;
            }
            report(
                registry
                    .add_batch(parts[3], parts[0], parts[1], parts[2])
                    .map(|b| format!("batch {} ({})", b.name, b.id)),
            );
        }
        "enroll" => {
            // enroll COURSE_ID BATCH_ID NAME...
            let parts: Vec<&str> = rest.splitn(3, ' ').collect();
            if parts.len() < 3 {
                println!("usage: enroll COURSE_ID BATCH_ID NAME");
                return;
            }
            report(
                registry
                    .add_student(parts[2], parts[0], parts[1])
                    .map(|s| format!("student {} ({})", s.name, s.id)),
            );
        }

        "del-subject" => report(registry.delete_subject(rest).map(|_| "subject removed".to_string())),
        "del-course" => report(registry.delete_course(rest).map(|_| "course removed".to_string())),
        "del-batch" => report(registry.delete_batch(rest).map(|_| "batch removed".to_string())),
        "del-student" => report(registry.delete_student(rest).map(|_| "student removed".to_string())),

        "subjects" => {
            for s in registry.subjects() {
                println!("{}  {}", s.id, s.name);
            }
        }
        "courses" => {
            for c in registry.courses() {
                let names: Vec<&str> = c
                    .subject_ids
                    .iter()
                    .filter_map(|id| registry.subject(id))
                    .map(|s| s.name.as_str())
                    .collect();
                println!("{}  {}  [{}]", c.id, c.name, names.join(", "));
            }
        }
        "batches" => {
            for b in registry.batches() {
                let course = registry.course(&b.course_id).map_or("?", |c| c.name.as_str());
                println!("{}  {}  {}  {} → {}", b.id, b.name, course, b.start_time, b.end_time);
            }
        }
        "batches-for" => {
            for b in registry.batches_for_course(rest) {
                println!("{}  {}  {} → {}", b.id, b.name, b.start_time, b.end_time);
            }
        }
        "students" => {
            for s in registry.students() {
                let course = registry.course(&s.course_id).map_or("?", |c| c.name.as_str());
                let batch = registry.batch(&s.batch_id).map_or("?", |b| b.name.as_str());
                println!("{}  {}  {}  {}", s.id, s.name, course, batch);
            }
        }

        _ => println!("unknown command '{command}' (try 'help')"),
    }
}

fn report(result: Result<String, training_registry::RegistryError>) {
    match result {
        Ok(message) => println!("✓ {message}"),
        Err(err) => println!("❌ {err}"),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add-subject NAME              create a subject");
    println!("  select SUBJECT_ID             toggle subject for the next course");
    println!("  add-course NAME               create a course from the selection");
    println!("  add-batch COURSE_ID START END NAME");
    println!("                                create a batch (START/END ISO-8601)");
    println!("  enroll COURSE_ID BATCH_ID NAME");
    println!("                                enroll a student");
    println!("  del-subject/del-course/del-batch/del-student ID");
    println!("  subjects | courses | batches | students");
    println!("  batches-for COURSE_ID         batches of one course");
    println!("  counts                        dashboard totals");
    println!("  dump                          registry as JSON");
    println!("  quit");
}

use shapecalc_term::{ColorTag, ScriptedConsole, ShapeCalculatorApp};

const FOOTER: &str = "    Thank you for using the Shape Calculator App!";

fn run_session(lines: &[&str]) -> ScriptedConsole {
    let console = ScriptedConsole::new(lines.iter().copied());
    let mut app = ShapeCalculatorApp::new(console);
    app.run().expect("session completes");
    app.into_console()
}

#[test]
fn circle_with_large_diameter_reports_metres() {
    let console = run_session(&["c", "150", "n"]);

    assert_eq!(
        console.tagged(ColorTag::Result),
        vec!["\nLength: 1.50 m", "Area: 1.77 m²", "Boundary Length: 4.71 m"]
    );
    assert_eq!(console.remaining_inputs(), 0);
}

#[test]
fn header_is_shown_once_and_footer_closes_the_session() {
    let console = run_session(&["s", "2", "y", "t", "10", "n"]);

    let headers = console
        .tagged(ColorTag::Header)
        .into_iter()
        .filter(|line| line.trim() == "Shape Calculator App")
        .count();
    assert_eq!(headers, 1);
    assert_eq!(console.count("Enter your choice: ", ColorTag::Input), 2);

    let footer = console.tagged(ColorTag::Footer);
    assert_eq!(footer.len(), 3);
    assert_eq!(footer[1], FOOTER);
    assert!(console.output().ends_with(&format!(
        "(y/n): \n{}\n{}\n{}\n",
        footer[0], FOOTER, footer[2]
    )));
}

#[test]
fn square_and_triangle_results_in_centimetres() {
    let console = run_session(&["s", "2", "y", "t", "10", "n"]);

    assert_eq!(
        console.tagged(ColorTag::Result),
        vec![
            "\nLength: 2.00 cm",
            "Area: 4.00 cm²",
            "Boundary Length: 8.00 cm",
            "\nLength: 10.00 cm",
            "Area: 43.30 cm²",
            "Boundary Length: 30.00 cm",
        ]
    );
}

#[test]
fn invalid_selection_returns_to_menu_without_continue_prompt() {
    let console = run_session(&["x", "", "circle", "C", "1", "n"]);

    assert_eq!(
        console.count("Invalid selection. Try again.", ColorTag::Error),
        3
    );
    assert_eq!(console.count("Enter your choice: ", ColorTag::Input), 4);
    assert_eq!(
        console.count("\nCalculate another shape? (y/n): ", ColorTag::Input),
        1
    );
}

#[test]
fn bad_length_and_bad_answer_are_retried() {
    let console = run_session(&["t", "abc", "0", "3,5", "maybe", "n"]);

    assert_eq!(
        console.tagged(ColorTag::Error),
        vec![
            "Error: Invalid input. Please enter a numeric value.",
            "Error: Invalid length. Please enter a value between 0.01 and 10000 cm.",
            "Please enter 'y' or 'n'.",
        ]
    );
    assert_eq!(console.tagged(ColorTag::Result)[0], "\nLength: 3.50 cm");
}

#[test]
fn every_read_uses_the_input_tag() {
    let console = run_session(&["c", "1", "n"]);

    assert_eq!(console.reads().len(), 3);
    assert!(console.reads().iter().all(|tag| *tag == ColorTag::Input));
}

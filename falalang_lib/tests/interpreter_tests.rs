use falalang_lib::falalang_errors::{InterpreterError, ParserError};
use falalang_lib::{run, Interpreter, InterpreterConfig, SAMPLE_PROGRAM};
use pretty_assertions::assert_eq;

#[test]
fn sample_program_output() {
    assert_eq!(
        run(SAMPLE_PROGRAM),
        vec![
            "O nome é \" + nome",
            "Isso é verdadeiro",
            "Dentro do laço",
        ]
    );
}

#[test]
fn sample_program_binds_nome() {
    let mut interpreter = Interpreter::new();
    interpreter.run(SAMPLE_PROGRAM);
    assert_eq!(interpreter.environment().get("nome"), Some("lalala"));
    assert_eq!(interpreter.environment().len(), 1);
}

#[test]
fn unrecognized_line_reports_and_continues() {
    let mut interpreter = Interpreter::new();
    let transcript = interpreter.run("foo bar\nmostrar \"depois\"");

    assert_eq!(
        transcript.rendered(),
        vec!["Comando não reconhecido: foo bar", "depois"]
    );
    assert!(interpreter.environment().is_empty());
    assert!(!transcript.is_halted());
}

#[test]
fn malformed_statements_become_diagnostics() {
    let program = "\
definir nome \"sem separador\"
se verdadeiro mostrar \"sem então\"
enquanto verdadeiro mostrar \"sem faça\"
mostrar \"fim\"";
    let transcript = Interpreter::new().run(program);

    assert_eq!(transcript.texts(), vec!["fim"]);

    let diagnostics = transcript.diagnostics();
    assert_eq!(diagnostics.len(), 3);
    assert!(matches!(
        diagnostics[0],
        InterpreterError::Parse(ParserError::MalformedDefinition { line: 1, .. })
    ));
    assert!(matches!(
        diagnostics[1],
        InterpreterError::Parse(ParserError::MalformedCompound { line: 2, keyword: "se", .. })
    ));
    assert!(matches!(
        diagnostics[2],
        InterpreterError::Parse(ParserError::MalformedCompound {
            line: 3,
            keyword: "enquanto",
            ..
        })
    ));
}

#[test]
fn malformed_messages_name_the_line() {
    let rendered = run("mostrar \"a\"\nse verdadeiro mostrar \"b\"");
    assert_eq!(
        rendered,
        vec![
            "a",
            "[Linha 2]: Comando 'se' sem o separador 'então': se verdadeiro mostrar \"b\"",
        ]
    );
}

#[test]
fn strict_mode_halts_on_first_diagnostic() {
    let mut interpreter = Interpreter::with_config(InterpreterConfig {
        strict: true,
        ..InterpreterConfig::default()
    });
    let transcript = interpreter.run("mostrar \"antes\"\nfoo\nmostrar \"depois\"");

    assert!(transcript.is_halted());
    assert_eq!(
        transcript.rendered(),
        vec!["antes", "Comando não reconhecido: foo"]
    );
}

#[test]
fn strict_mode_without_errors_runs_to_completion() {
    let mut interpreter = Interpreter::with_config(InterpreterConfig {
        strict: true,
        ..InterpreterConfig::default()
    });
    let transcript = interpreter.run(SAMPLE_PROGRAM);

    assert!(!transcript.is_halted());
    assert_eq!(transcript.texts().len(), 3);
}

#[test]
fn later_definition_overwrites_earlier_one() {
    let mut interpreter = Interpreter::new();
    interpreter.run("definir cor como \"azul\"\ndefinir cor como \"verde\"");
    assert_eq!(interpreter.environment().get("cor"), Some("verde"));
}

#[test]
fn same_interpreter_threads_environment_between_runs() {
    let mut interpreter = Interpreter::new();
    interpreter.run("definir a como \"1\"");
    interpreter.run("definir b como \"2\"");

    assert_eq!(interpreter.environment().get("a"), Some("1"));
    assert_eq!(interpreter.environment().get("b"), Some("2"));
}

#[test]
fn nested_conditionals_follow_each_condition() {
    let program = "\
se verdadeiro então se verdadeiro então mostrar \"dois níveis\"
se verdadeiro então se falso então mostrar \"nunca\"
se falso então se verdadeiro então mostrar \"nunca\"
enquanto verdadeiro faça se verdadeiro então mostrar \"laço e se\"";

    assert_eq!(run(program), vec!["dois níveis", "laço e se"]);
}

#[test]
fn default_depth_guard_rejects_adversarial_nesting() {
    let mut program = "se verdadeiro então ".repeat(100);
    program.push_str("mostrar \"fundo\"");

    let transcript = Interpreter::new().run(&program);

    assert!(transcript.texts().is_empty());
    assert!(matches!(
        transcript.diagnostics()[..],
        [InterpreterError::NestingTooDeep { limit: 32, .. }]
    ));
}

#[test]
fn show_without_quotes_is_emitted_as_is() {
    assert_eq!(run("mostrar olá mundo"), vec!["olá mundo"]);
    assert_eq!(run("mostrar"), vec![""]);
}

#[test]
fn como_is_a_valid_variable_name() {
    let mut interpreter = Interpreter::new();
    let transcript = interpreter.run("definir como como \"x\"\ndefinir como \"y\"");

    assert_eq!(interpreter.environment().get("como"), Some("x"));
    assert_eq!(
        transcript.rendered(),
        vec!["[Linha 2]: Definição malformada (nome vazio): definir como \"y\""]
    );
}

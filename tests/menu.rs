mod common;

#[cfg(test)]
mod tests {
    use super::common::{Answer, DbContext, ScriptedPrompt};
    use roster::commands::menu;
    use roster::db::departments::Departments;
    use roster::db::roles::Roles;
    use roster::libs::messages::Message;
    use roster::libs::prompt::is_interrupted;
    use test_context::test_context;

    #[test_context(DbContext)]
    #[test]
    fn test_exit_immediately(ctx: &mut DbContext) {
        let mut prompt = ScriptedPrompt::new(vec![Answer::Choice(7)]);

        menu::run(&ctx.db, &mut prompt).unwrap();

        assert_eq!(prompt.offered.len(), 1);
        assert_eq!(prompt.offered[0].len(), 8);
        assert_eq!(prompt.offered[0][7], "Exit");
    }

    #[test_context(DbContext)]
    #[test]
    fn test_menu_loops_after_each_action(ctx: &mut DbContext) {
        let mut prompt = ScriptedPrompt::new(vec![
            Answer::Choice(3),
            Answer::Text("Engineering"),
            Answer::Choice(0),
            Answer::Choice(7),
        ]);

        menu::run(&ctx.db, &mut prompt).unwrap();

        assert_eq!(prompt.times_asked(Message::MenuPrompt), 3);
        assert_eq!(prompt.remaining(), 0);
        assert_eq!(Departments::new(&ctx.db).list().unwrap().len(), 1);
    }

    #[test_context(DbContext)]
    #[test]
    fn test_missing_prerequisite_returns_to_menu(ctx: &mut DbContext) {
        // Add Role with no departments, then exit.
        let mut prompt = ScriptedPrompt::new(vec![Answer::Choice(4), Answer::Choice(7)]);

        menu::run(&ctx.db, &mut prompt).unwrap();

        assert_eq!(prompt.times_asked(Message::MenuPrompt), 2);
        assert_eq!(prompt.times_asked(Message::PromptRoleTitle), 0);
        assert!(Roles::new(&ctx.db).list().unwrap().is_empty());
    }

    #[test_context(DbContext)]
    #[test]
    fn test_database_error_is_not_fatal(ctx: &mut DbContext) {
        ctx.db.conn.execute_batch("DROP TABLE employee").unwrap();
        let mut prompt = ScriptedPrompt::new(vec![Answer::Choice(2), Answer::Choice(0), Answer::Choice(7)]);

        menu::run(&ctx.db, &mut prompt).unwrap();

        assert_eq!(prompt.times_asked(Message::MenuPrompt), 3);
    }

    #[test_context(DbContext)]
    #[test]
    fn test_interrupt_ends_loop(ctx: &mut DbContext) {
        let mut prompt = ScriptedPrompt::new(vec![Answer::Choice(3), Answer::Interrupt, Answer::Choice(7)]);

        let error = menu::run(&ctx.db, &mut prompt).unwrap_err();

        assert!(is_interrupted(&error));
        assert_eq!(prompt.remaining(), 1);
        assert!(Departments::new(&ctx.db).list().unwrap().is_empty());
    }
}

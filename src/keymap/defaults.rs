//! Default keybindings
//!
//! Every supported action is registered exactly once here with its stable
//! persistence name, label, default chord and handler. Names must never change:
//! they are the keys users' stores are matched against.

use std::path::Path;

use strum::{EnumCount, IntoEnumIterator};

use super::command::{
    BuildKey, DocumentKey, EditKey, EditingKey, FileKey, FocusKey, GroupCommand, GroupId, HelpKey,
    NotebookKey, OtherKey, SearchKey, TagsKey, ToolsKey, ViewKey,
};
use super::config::load_overrides;
use super::handler::Handler;
use super::keymap::Keymap;
use super::types::{Chord, KeyCode, Modifiers};

/// Store section every default group is persisted under
pub const DEFAULT_SECTION: &str = "Bindings";

/// Build the default registry, then apply the user's store at `store_path`
///
/// A missing or unreadable store leaves every default in place.
pub fn load_keymap(store_path: &Path) -> Keymap {
    let mut keymap = default_keymap();
    let applied = load_overrides(&mut keymap, store_path);
    tracing::info!(
        "Loaded keymap ({} bindings, {} user overrides from {})",
        keymap.len(),
        applied,
        store_path.display()
    );
    keymap
}

/// Build the registry with every compiled-in default
pub fn default_keymap() -> Keymap {
    let mut keymap = Keymap::with_capacity(GroupId::COUNT);
    for group in GroupId::iter() {
        let id = keymap.add_group(DEFAULT_SECTION, group.label(), group.command_count());
        debug_assert_eq!(id, group as usize);
    }

    let none = Modifiers::empty();
    let ctrl = Modifiers::CONTROL;
    let shift = Modifiers::SHIFT;
    let alt = Modifiers::ALT;
    let ctrl_shift = Modifiers::CONTROL | Modifiers::SHIFT;
    let ctrl_alt = Modifiers::CONTROL | Modifiers::ALT;
    let shift_alt = Modifiers::SHIFT | Modifiers::ALT;
    let unbound = Chord::UNBOUND;

    let km = &mut keymap;

    // ====================================================================
    // File menu
    // ====================================================================
    let h = Some(Handler::FileAction);
    bind(km, FileKey::New, h, ch('n', ctrl), "menu_new", "New");
    bind(km, FileKey::Open, h, ch('o', ctrl), "menu_open", "Open");
    bind(km, FileKey::OpenSelected, h, ch('o', ctrl_shift), "menu_open_selected", "Open selected file");
    bind(km, FileKey::Save, h, ch('s', ctrl), "menu_save", "Save");
    bind(km, FileKey::SaveAs, h, unbound, "menu_saveas", "Save as");
    bind(km, FileKey::SaveAll, h, ch('s', ctrl_shift), "menu_saveall", "Save all");
    bind(km, FileKey::Print, Some(Handler::Print), ch('p', ctrl), "menu_print", "Print");
    bind(km, FileKey::Close, h, ch('w', ctrl), "menu_close", "Close");
    bind(km, FileKey::CloseAll, h, ch('w', ctrl_shift), "menu_closeall", "Close all");
    bind(km, FileKey::Reload, h, ch('r', ctrl), "menu_reloadfile", "Reload file");
    bind(km, FileKey::ProjectProperties, h, unbound, "project_properties", "Project properties");

    // ====================================================================
    // Edit menu
    // ====================================================================
    bind(km, EditKey::Undo, Some(Handler::Undo), ch('z', ctrl), "menu_undo", "Undo");
    bind(km, EditKey::Redo, Some(Handler::Redo), ch('y', ctrl), "menu_redo", "Redo");
    let h = Some(Handler::Clipboard);
    bind(km, EditKey::Cut, h, ch('x', ctrl), "menu_cut", "Cut");
    bind(km, EditKey::Copy, h, ch('c', ctrl), "menu_copy", "Copy");
    bind(km, EditKey::Paste, h, ch('v', ctrl), "menu_paste", "Paste");
    bind(km, EditKey::SelectAll, Some(Handler::SelectAll), ch('a', ctrl), "menu_selectall", "Select All");
    bind(km, EditKey::InsertDate, Some(Handler::InsertDate), ch('d', shift_alt), "menu_insert_date", "Insert date");
    bind(km, EditKey::Preferences, Some(Handler::Preferences), ch('p', ctrl_alt), "menu_preferences", "Preferences");

    // ====================================================================
    // Search menu
    // ====================================================================
    let h = Some(Handler::Search);
    bind(km, SearchKey::Find, h, ch('f', ctrl), "menu_find", "Find");
    bind(km, SearchKey::FindNext, h, ch('g', ctrl), "menu_findnext", "Find Next");
    bind(km, SearchKey::FindPrevious, h, ch('g', ctrl_shift), "menu_findprevious", "Find Previous");
    bind(km, SearchKey::FindNextSelection, h, unbound, "menu_findnextsel", "Find Next Selection");
    bind(km, SearchKey::FindPreviousSelection, h, unbound, "menu_findprevsel", "Find Previous Selection");
    bind(km, SearchKey::Replace, h, ch('h', ctrl), "menu_replace", "Replace");
    bind(km, SearchKey::FindInFiles, h, ch('f', ctrl_shift), "menu_findinfiles", "Find in Files");
    bind(km, SearchKey::NextMessage, h, unbound, "menu_nextmessage", "Next Message");
    bind(km, SearchKey::GoToLine, h, ch('l', ctrl), "menu_gotoline", "Go to Line");

    // ====================================================================
    // View menu
    // ====================================================================
    bind(km, ViewKey::ToggleAll, Some(Handler::ToggleAll), unbound, "menu_toggleall", "Toggle All Additional Widgets");
    bind(km, ViewKey::Fullscreen, Some(Handler::Fullscreen), key(KeyCode::F(11), none), "menu_fullscreen", "Fullscreen");
    bind(km, ViewKey::MessageWindow, Some(Handler::MessageWindow), unbound, "menu_messagewindow", "Toggle Messages Window");
    bind(km, ViewKey::Sidebar, Some(Handler::ToggleSidebar), unbound, "toggle_sidebar", "Toggle Sidebar");
    bind(km, ViewKey::ZoomIn, Some(Handler::ZoomIn), ch('+', ctrl), "menu_zoomin", "Zoom In");
    bind(km, ViewKey::ZoomOut, Some(Handler::ZoomOut), ch('-', ctrl), "menu_zoomout", "Zoom Out");

    // ====================================================================
    // Document menu
    // ====================================================================
    bind(km, DocumentKey::ReplaceTabs, Some(Handler::ReplaceTabs), unbound, "menu_replacetabs", "Replace tabs by space");
    bind(km, DocumentKey::FoldAll, Some(Handler::FoldAll), unbound, "menu_foldall", "Fold all");
    bind(km, DocumentKey::UnfoldAll, Some(Handler::UnfoldAll), unbound, "menu_unfoldall", "Unfold all");
    bind(km, DocumentKey::ReloadTagList, Some(Handler::ReloadTagList), ch('r', ctrl_shift), "reloadtaglist", "Reload symbol list");

    // ====================================================================
    // Build menu
    // ====================================================================
    let h = Some(Handler::BuildAction);
    bind(km, BuildKey::Compile, h, key(KeyCode::F(8), none), "build_compile", "Compile");
    bind(km, BuildKey::Link, h, key(KeyCode::F(9), none), "build_link", "Build");
    bind(km, BuildKey::Make, h, key(KeyCode::F(9), shift), "build_make", "Make all");
    bind(km, BuildKey::MakeOwnTarget, h, key(KeyCode::F(9), ctrl_shift), "build_makeowntarget", "Make custom target");
    bind(km, BuildKey::MakeObject, h, unbound, "build_makeobject", "Make object");
    bind(km, BuildKey::NextError, h, unbound, "build_nexterror", "Next error");
    bind(km, BuildKey::Run, h, key(KeyCode::F(5), none), "build_run", "Run");
    bind(km, BuildKey::Run2, h, unbound, "build_run2", "Run (alternative command)");
    bind(km, BuildKey::Options, h, unbound, "build_options", "Build options");

    // ====================================================================
    // Tools menu
    // ====================================================================
    bind(km, ToolsKey::OpenColorChooser, Some(Handler::ColorChooser), unbound, "menu_opencolorchooser", "Show Color Chooser");
    bind(km, ToolsKey::InsertSpecialChars, Some(Handler::InsertSpecialChars), unbound, "menu_insert_specialchars", "Insert Special HTML Characters");

    // ====================================================================
    // Help menu
    // ====================================================================
    bind(km, HelpKey::Help, Some(Handler::Help), key(KeyCode::F(1), none), "menu_help", "Help");

    // ====================================================================
    // Focus commands
    // ====================================================================
    bind(km, FocusKey::Editor, Some(Handler::SwitchEditor), key(KeyCode::F(2), none), "switch_editor", "Switch to Editor");
    bind(km, FocusKey::Scribble, Some(Handler::SwitchScribble), key(KeyCode::F(6), none), "switch_scribble", "Switch to Scribble");
    bind(km, FocusKey::Terminal, Some(Handler::SwitchTerminal), key(KeyCode::F(4), none), "switch_vte", "Switch to Terminal");
    bind(km, FocusKey::SearchBar, Some(Handler::SwitchSearchBar), key(KeyCode::F(7), none), "switch_search_bar", "Switch to Search Bar");

    // ====================================================================
    // Notebook tab commands
    // ====================================================================
    bind(km, NotebookKey::SwitchTabLeft, Some(Handler::SwitchTabLeft), key(KeyCode::PageUp, ctrl), "switch_tableft", "Switch to left document");
    bind(km, NotebookKey::SwitchTabRight, Some(Handler::SwitchTabRight), key(KeyCode::PageDown, ctrl), "switch_tabright", "Switch to right document");
    bind(km, NotebookKey::SwitchTabLastUsed, Some(Handler::SwitchTabLastUsed), key(KeyCode::Tab, ctrl), "switch_tablastused", "Switch to last used document");
    let h = Some(Handler::MoveTab);
    bind(km, NotebookKey::MoveTabLeft, h, key(KeyCode::PageUp, alt), "move_tableft", "Move document left");
    bind(km, NotebookKey::MoveTabRight, h, key(KeyCode::PageDown, alt), "move_tabright", "Move document right");
    bind(km, NotebookKey::MoveTabFirst, h, unbound, "move_tabfirst", "Move document first");
    bind(km, NotebookKey::MoveTabLast, h, unbound, "move_tablast", "Move document last");

    // ====================================================================
    // Editing commands
    // ====================================================================
    let h = Some(Handler::Editing);
    bind(km, EditingKey::DuplicateLine, h, ch('d', ctrl), "edit_duplicateline", "Duplicate line or selection");
    bind(km, EditingKey::DeleteLine, h, ch('k', ctrl), "edit_deleteline", "Delete current line(s)");
    bind(km, EditingKey::CopyLine, h, ch('c', ctrl_shift), "edit_copyline", "Copy current line(s)");
    bind(km, EditingKey::CutLine, h, ch('x', ctrl_shift), "edit_cutline", "Cut current line(s)");
    bind(km, EditingKey::TransposeLine, h, ch('t', ctrl), "edit_transposeline", "Transpose current line");
    bind(km, EditingKey::ToggleCase, h, ch('u', ctrl_alt), "edit_togglecase", "Toggle Case of Selection");
    bind(km, EditingKey::ToggleComment, h, ch('e', ctrl), "edit_commentlinetoggle", "Toggle line commentation");
    bind(km, EditingKey::Comment, h, unbound, "edit_commentline", "Comment line(s)");
    bind(km, EditingKey::Uncomment, h, unbound, "edit_uncommentline", "Uncomment line(s)");
    bind(km, EditingKey::IncreaseIndent, h, ch('i', ctrl), "edit_increaseindent", "Increase indent");
    bind(km, EditingKey::DecreaseIndent, h, ch('u', ctrl), "edit_decreaseindent", "Decrease indent");
    bind(km, EditingKey::IncreaseIndentBySpace, h, unbound, "edit_increaseindentbyspace", "Increase indent by one space");
    bind(km, EditingKey::DecreaseIndentBySpace, h, unbound, "edit_decreaseindentbyspace", "Decrease indent by one space");
    bind(km, EditingKey::AutoIndent, h, unbound, "edit_autoindent", "Smart line indent");
    bind(km, EditingKey::SendToCmd1, h, ch('1', ctrl), "edit_sendtocmd1", "Send to Custom Command 1");
    bind(km, EditingKey::SendToCmd2, h, ch('2', ctrl), "edit_sendtocmd2", "Send to Custom Command 2");
    bind(km, EditingKey::SendToCmd3, h, ch('3', ctrl), "edit_sendtocmd3", "Send to Custom Command 3");
    let g = Some(Handler::EditingGlobal);
    bind(km, EditingKey::GoToMatchingBrace, g, ch('b', ctrl), "edit_gotomatchingbrace", "Go to matching brace");
    bind(km, EditingKey::ToggleMarker, g, ch('m', ctrl), "edit_togglemarker", "Toggle marker");
    bind(km, EditingKey::GoToNextMarker, g, ch('.', ctrl), "edit_gotonextmarker", "Go to next marker");
    bind(km, EditingKey::GoToPreviousMarker, g, ch(',', ctrl), "edit_gotopreviousmarker", "Go to previous marker");
    bind(km, EditingKey::SelectWord, h, ch('w', shift_alt), "edit_selectword", "Select current word");
    bind(km, EditingKey::SelectLine, h, ch('l', shift_alt), "edit_selectline", "Select current line(s)");
    bind(km, EditingKey::SelectParagraph, h, ch('p', shift_alt), "edit_selectparagraph", "Select current paragraph");
    bind(km, EditingKey::ScrollToLine, h, ch('l', ctrl_shift), "edit_scrolltoline", "Scroll to current line");
    bind(km, EditingKey::ScrollLineUp, h, key(KeyCode::Up, alt), "edit_scrolllineup", "Scroll up the view by one line");
    bind(km, EditingKey::ScrollLineDown, h, key(KeyCode::Down, alt), "edit_scrolllinedown", "Scroll down the view by one line");
    bind(km, EditingKey::InsertWhitespace, h, unbound, "edit_insertwhitespace", "Insert alternative white space");
    let w = Some(Handler::CurrentWord);
    bind(km, EditingKey::FindUsage, w, unbound, "popup_findusage", "Find Usage");
    bind(km, EditingKey::ContextAction, w, unbound, "popup_contextaction", "Context Action");

    // ====================================================================
    // Tag commands
    // ====================================================================
    let h = Some(Handler::Tags);
    bind(km, TagsKey::AutoComplete, h, key(KeyCode::Space, ctrl), "edit_autocomplete", "Complete word");
    bind(km, TagsKey::CallTip, h, key(KeyCode::Space, ctrl_shift), "edit_calltip", "Show calltip");
    bind(km, TagsKey::MacroList, h, key(KeyCode::Enter, ctrl), "edit_macrolist", "Show macro list");
    // Intercepted before the registry scan; see `Keybindings::dispatch`
    bind(km, TagsKey::CompleteSnippet, None, key(KeyCode::Tab, none), "edit_completesnippet", "Complete snippet");
    bind(km, TagsKey::SuppressSnippetCompletion, h, unbound, "edit_suppresssnippetcompletion", "Suppress snippet completion");
    bind(km, TagsKey::GoToTagDefinition, w, unbound, "popup_gototagdefinition", "Go to tag definition");
    bind(km, TagsKey::GoToTagDeclaration, w, unbound, "popup_gototagdeclaration", "Go to tag declaration");

    // ====================================================================
    // Other commands
    // ====================================================================
    bind(km, OtherKey::NavBack, Some(Handler::NavBack), unbound, "nav_back", "Navigate back a location");
    bind(km, OtherKey::NavForward, Some(Handler::NavForward), unbound, "nav_forward", "Navigate forward a location");

    keymap
}

/// Helper to register a typed default binding
fn bind<K: GroupCommand>(
    keymap: &mut Keymap,
    command: K,
    handler: Option<Handler>,
    chord: Chord,
    name: &str,
    label: &str,
) {
    keymap.set_binding(K::GROUP as usize, command.id(), handler, chord, name, label);
}

fn ch(c: char, mods: Modifiers) -> Chord {
    Chord::char(c, mods)
}

fn key(key: KeyCode, mods: Modifiers) -> Chord {
    Chord::new(key, mods)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_default_keymap_shape() {
        let keymap = default_keymap();
        assert_eq!(keymap.groups().len(), GroupId::COUNT);
        for group in GroupId::iter() {
            let registered = keymap.group(group as usize).expect("group registered");
            assert_eq!(registered.len(), group.command_count());
            assert_eq!(registered.label, group.label());
            assert_eq!(registered.name, DEFAULT_SECTION);
        }
    }

    #[test]
    fn test_every_slot_registered() {
        let keymap = default_keymap();
        for entry in keymap.iter() {
            assert!(
                entry.binding.is_registered(),
                "slot {}/{} left empty",
                entry.group.label,
                entry.command_id
            );
        }
    }

    #[test]
    fn test_names_unique() {
        let keymap = default_keymap();
        let mut seen = HashSet::new();
        for entry in keymap.iter() {
            assert!(
                seen.insert(entry.binding.name.clone()),
                "duplicate name {}",
                entry.binding.name
            );
        }
    }

    #[test]
    fn test_only_snippet_has_no_handler() {
        let keymap = default_keymap();
        let without: Vec<_> = keymap
            .iter()
            .filter(|e| e.binding.handler.is_none())
            .map(|e| e.binding.name.as_str())
            .collect();
        assert_eq!(without, ["edit_completesnippet"]);
    }

    #[test]
    fn test_spot_check_defaults() {
        let keymap = default_keymap();
        let chord = |k| keymap.get(k).map(|b| b.chord);

        assert_eq!(chord(FileKey::New), Some(Chord::char('n', Modifiers::CONTROL)));
        assert_eq!(chord(FileKey::SaveAs), Some(Chord::UNBOUND));
        assert_eq!(
            chord(FileKey::SaveAll),
            Some(Chord::char('s', Modifiers::CONTROL | Modifiers::SHIFT))
        );
    }

    #[test]
    fn test_spot_check_other_groups() {
        let keymap = default_keymap();
        assert_eq!(
            keymap.get(TagsKey::CompleteSnippet).map(|b| b.chord),
            Some(Chord::key(KeyCode::Tab))
        );
        assert_eq!(
            keymap.get(NotebookKey::SwitchTabLastUsed).map(|b| b.chord),
            Some(Chord::new(KeyCode::Tab, Modifiers::CONTROL))
        );
        assert_eq!(
            keymap.get(BuildKey::MakeOwnTarget).map(|b| b.chord),
            Some(Chord::new(KeyCode::F(9), Modifiers::CONTROL | Modifiers::SHIFT))
        );
        assert_eq!(
            keymap.get(EditingKey::ContextAction).map(|b| b.name.as_str()),
            Some("popup_contextaction")
        );
    }
}

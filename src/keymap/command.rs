//! Typed group and command identifiers
//!
//! Every default group has a dense command enum whose discriminant is the
//! command id (the binding's index within its group). `Command` wraps them so a
//! host receives one strongly-typed value per invoked binding.

use strum::{Display, EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// The default groups, in declaration order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumCount,
    EnumIter,
    FromRepr,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(usize)]
pub enum GroupId {
    File,
    Edit,
    Search,
    View,
    Document,
    Build,
    Tools,
    Help,
    Focus,
    Notebook,
    Editing,
    Tags,
    Other,
}

impl GroupId {
    /// Human-readable group label
    pub fn label(self) -> &'static str {
        match self {
            GroupId::File => "File menu",
            GroupId::Edit => "Edit menu",
            GroupId::Search => "Search menu",
            GroupId::View => "View menu",
            GroupId::Document => "Document menu",
            GroupId::Build => "Build menu",
            GroupId::Tools => "Tools menu",
            GroupId::Help => "Help menu",
            GroupId::Focus => "Focus commands",
            GroupId::Notebook => "Notebook tab commands",
            GroupId::Editing => "Editing commands",
            GroupId::Tags => "Tag commands",
            GroupId::Other => "Other commands",
        }
    }

    /// Number of commands in this group
    pub fn command_count(self) -> usize {
        match self {
            GroupId::File => FileKey::COUNT,
            GroupId::Edit => EditKey::COUNT,
            GroupId::Search => SearchKey::COUNT,
            GroupId::View => ViewKey::COUNT,
            GroupId::Document => DocumentKey::COUNT,
            GroupId::Build => BuildKey::COUNT,
            GroupId::Tools => ToolsKey::COUNT,
            GroupId::Help => HelpKey::COUNT,
            GroupId::Focus => FocusKey::COUNT,
            GroupId::Notebook => NotebookKey::COUNT,
            GroupId::Editing => EditingKey::COUNT,
            GroupId::Tags => TagsKey::COUNT,
            GroupId::Other => OtherKey::COUNT,
        }
    }
}

/// A command enum belonging to one group
pub trait GroupCommand: Copy {
    const GROUP: GroupId;

    /// Zero-based index of the command within its group
    fn id(self) -> usize;
}

macro_rules! group_keys {
    ($(#[$meta:meta])* $name:ident => $group:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, FromRepr)]
        #[repr(usize)]
        pub enum $name {
            $($variant),+
        }

        impl GroupCommand for $name {
            const GROUP: GroupId = GroupId::$group;

            fn id(self) -> usize {
                self as usize
            }
        }

        impl From<$name> for Command {
            fn from(key: $name) -> Self {
                Command::$group(key)
            }
        }
    };
}

group_keys! {
    /// File menu commands
    FileKey => File {
        New,
        Open,
        OpenSelected,
        Save,
        SaveAs,
        SaveAll,
        Print,
        Close,
        CloseAll,
        Reload,
        ProjectProperties,
    }
}

group_keys! {
    /// Edit menu commands
    EditKey => Edit {
        Undo,
        Redo,
        Cut,
        Copy,
        Paste,
        SelectAll,
        InsertDate,
        Preferences,
    }
}

group_keys! {
    /// Search menu commands
    SearchKey => Search {
        Find,
        FindNext,
        FindPrevious,
        FindNextSelection,
        FindPreviousSelection,
        Replace,
        FindInFiles,
        NextMessage,
        GoToLine,
    }
}

group_keys! {
    /// View menu commands
    ViewKey => View {
        ToggleAll,
        Fullscreen,
        MessageWindow,
        Sidebar,
        ZoomIn,
        ZoomOut,
    }
}

group_keys! {
    /// Document menu commands
    DocumentKey => Document {
        ReplaceTabs,
        FoldAll,
        UnfoldAll,
        ReloadTagList,
    }
}

group_keys! {
    /// Build menu commands
    BuildKey => Build {
        Compile,
        Link,
        Make,
        MakeOwnTarget,
        MakeObject,
        NextError,
        Run,
        Run2,
        Options,
    }
}

group_keys! {
    /// Tools menu commands
    ToolsKey => Tools {
        OpenColorChooser,
        InsertSpecialChars,
    }
}

group_keys! {
    /// Help menu commands
    HelpKey => Help {
        Help,
    }
}

group_keys! {
    /// Focus commands
    FocusKey => Focus {
        Editor,
        Scribble,
        Terminal,
        SearchBar,
    }
}

group_keys! {
    /// Notebook tab commands
    NotebookKey => Notebook {
        SwitchTabLeft,
        SwitchTabRight,
        SwitchTabLastUsed,
        MoveTabLeft,
        MoveTabRight,
        MoveTabFirst,
        MoveTabLast,
    }
}

group_keys! {
    /// Editing commands
    EditingKey => Editing {
        DuplicateLine,
        DeleteLine,
        CopyLine,
        CutLine,
        TransposeLine,
        ToggleCase,
        ToggleComment,
        Comment,
        Uncomment,
        IncreaseIndent,
        DecreaseIndent,
        IncreaseIndentBySpace,
        DecreaseIndentBySpace,
        AutoIndent,
        SendToCmd1,
        SendToCmd2,
        SendToCmd3,
        GoToMatchingBrace,
        ToggleMarker,
        GoToNextMarker,
        GoToPreviousMarker,
        SelectWord,
        SelectLine,
        SelectParagraph,
        ScrollToLine,
        ScrollLineUp,
        ScrollLineDown,
        InsertWhitespace,
        FindUsage,
        ContextAction,
    }
}

group_keys! {
    /// Tag commands
    TagsKey => Tags {
        AutoComplete,
        CallTip,
        MacroList,
        CompleteSnippet,
        SuppressSnippetCompletion,
        GoToTagDefinition,
        GoToTagDeclaration,
    }
}

group_keys! {
    /// Other commands
    OtherKey => Other {
        NavBack,
        NavForward,
    }
}

/// A command forwarded to the host when a binding fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    File(FileKey),
    Edit(EditKey),
    Search(SearchKey),
    View(ViewKey),
    Document(DocumentKey),
    Build(BuildKey),
    Tools(ToolsKey),
    Help(HelpKey),
    Focus(FocusKey),
    Notebook(NotebookKey),
    Editing(EditingKey),
    Tags(TagsKey),
    Other(OtherKey),
}

impl Command {
    /// Resolve a (group id, command id) pair; `None` when either is out of range
    pub fn from_ids(group_id: usize, command_id: usize) -> Option<Self> {
        let command = match GroupId::from_repr(group_id)? {
            GroupId::File => Command::File(FileKey::from_repr(command_id)?),
            GroupId::Edit => Command::Edit(EditKey::from_repr(command_id)?),
            GroupId::Search => Command::Search(SearchKey::from_repr(command_id)?),
            GroupId::View => Command::View(ViewKey::from_repr(command_id)?),
            GroupId::Document => Command::Document(DocumentKey::from_repr(command_id)?),
            GroupId::Build => Command::Build(BuildKey::from_repr(command_id)?),
            GroupId::Tools => Command::Tools(ToolsKey::from_repr(command_id)?),
            GroupId::Help => Command::Help(HelpKey::from_repr(command_id)?),
            GroupId::Focus => Command::Focus(FocusKey::from_repr(command_id)?),
            GroupId::Notebook => Command::Notebook(NotebookKey::from_repr(command_id)?),
            GroupId::Editing => Command::Editing(EditingKey::from_repr(command_id)?),
            GroupId::Tags => Command::Tags(TagsKey::from_repr(command_id)?),
            GroupId::Other => Command::Other(OtherKey::from_repr(command_id)?),
        };
        Some(command)
    }

    /// The group this command belongs to
    pub fn group(self) -> GroupId {
        match self {
            Command::File(_) => GroupId::File,
            Command::Edit(_) => GroupId::Edit,
            Command::Search(_) => GroupId::Search,
            Command::View(_) => GroupId::View,
            Command::Document(_) => GroupId::Document,
            Command::Build(_) => GroupId::Build,
            Command::Tools(_) => GroupId::Tools,
            Command::Help(_) => GroupId::Help,
            Command::Focus(_) => GroupId::Focus,
            Command::Notebook(_) => GroupId::Notebook,
            Command::Editing(_) => GroupId::Editing,
            Command::Tags(_) => GroupId::Tags,
            Command::Other(_) => GroupId::Other,
        }
    }

    /// The command id within its group
    pub fn id(self) -> usize {
        match self {
            Command::File(k) => k.id(),
            Command::Edit(k) => k.id(),
            Command::Search(k) => k.id(),
            Command::View(k) => k.id(),
            Command::Document(k) => k.id(),
            Command::Build(k) => k.id(),
            Command::Tools(k) => k.id(),
            Command::Help(k) => k.id(),
            Command::Focus(k) => k.id(),
            Command::Notebook(k) => k.id(),
            Command::Editing(k) => k.id(),
            Command::Tags(k) => k.id(),
            Command::Other(k) => k.id(),
        }
    }
}

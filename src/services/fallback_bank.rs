//! Pre-authored question sets served whenever model generation is rejected.

use crate::models::question::{QuizQuestion, QuizSet, QUIZ_LENGTH};

/// Skill served for names the bank does not know.
pub const DEFAULT_SKILL: &str = "JavaScript";

struct BankQuestion {
    question: &'static str,
    options: [&'static str; 4],
    correct_answer: i32,
    explanation: &'static str,
}

impl BankQuestion {
    fn to_question(&self) -> QuizQuestion {
        QuizQuestion {
            question: self.question.to_string(),
            options: self.options.iter().map(|o| o.to_string()).collect(),
            correct_answer: self.correct_answer,
            explanation: Some(self.explanation.to_string()),
        }
    }
}

macro_rules! q {
    ($question:expr, [$a:expr, $b:expr, $c:expr, $d:expr], $correct:expr, $explanation:expr) => {
        BankQuestion {
            question: $question,
            options: [$a, $b, $c, $d],
            correct_answer: $correct,
            explanation: $explanation,
        }
    };
}

static BANK: &[(&str, [BankQuestion; QUIZ_LENGTH])] = &[
    (
        "JavaScript",
        [
            q!(
                "What is the result of typeof null in JavaScript?",
                ["null", "undefined", "object", "boolean"],
                2,
                "typeof null returns \"object\" due to a legacy bug in JavaScript."
            ),
            q!(
                "Which method is used to add an element to the end of an array?",
                ["push()", "pop()", "shift()", "unshift()"],
                0,
                "push() adds one or more elements to the end of an array."
            ),
            q!(
                "What does the \"this\" keyword refer to in JavaScript?",
                ["The global object", "The current function", "The context object", "The window object"],
                2,
                "\"this\" refers to the object that is executing the current function."
            ),
            q!(
                "Which of the following is NOT a JavaScript data type?",
                ["String", "Boolean", "Float", "Symbol"],
                2,
                "JavaScript has a single Number type, not separate Integer and Float types."
            ),
            q!(
                "What is the purpose of the Promise object in JavaScript?",
                [
                    "To handle synchronous operations",
                    "To handle asynchronous operations",
                    "To create loops",
                    "To define variables"
                ],
                1,
                "Promises represent the eventual result of an asynchronous operation."
            ),
        ],
    ),
    (
        "React",
        [
            q!(
                "What is JSX in React?",
                ["A JavaScript library", "A syntax extension for JavaScript", "A CSS framework", "A database"],
                1,
                "JSX is a syntax extension that lets components describe markup inline."
            ),
            q!(
                "Which hook is used to manage state in functional components?",
                ["useEffect", "useState", "useContext", "useReducer"],
                1,
                "useState is the primary hook for local component state."
            ),
            q!(
                "What is the purpose of the useEffect hook?",
                ["To manage state", "To handle side effects", "To create components", "To define props"],
                1,
                "useEffect runs side effects such as data fetching and subscriptions."
            ),
            q!(
                "How do you pass data from a parent to a child component in React?",
                ["Through state", "Through props", "Through context", "Through refs"],
                1,
                "Props carry data from parent components down to children."
            ),
            q!(
                "What is the virtual DOM in React?",
                [
                    "A real DOM element",
                    "A JavaScript representation of the real DOM",
                    "A CSS framework",
                    "A database"
                ],
                1,
                "React diffs an in-memory tree against the previous one to batch real DOM updates."
            ),
        ],
    ),
    (
        "Python",
        [
            q!(
                "What is the output of print(type([]))?",
                ["<class 'array'>", "<class 'list'>", "<class 'tuple'>", "<class 'dict'>"],
                1,
                "[] creates an empty list, so type([]) is <class 'list'>."
            ),
            q!(
                "Which keyword is used to define a function in Python?",
                ["function", "def", "func", "define"],
                1,
                "Functions are declared with the def keyword."
            ),
            q!(
                "What is the difference between a list and a tuple in Python?",
                [
                    "Lists are immutable, tuples are mutable",
                    "Lists are mutable, tuples are immutable",
                    "There is no difference",
                    "Lists are always faster"
                ],
                1,
                "Lists can be changed in place while tuples cannot."
            ),
            q!(
                "Which method adds an item to the end of a list in Python?",
                ["add()", "append()", "insert()", "push()"],
                1,
                "list.append() adds a single item at the end."
            ),
            q!(
                "What does the \"self\" parameter represent in Python instance methods?",
                ["The class itself", "The instance of the class", "A static method", "A global variable"],
                1,
                "self is the instance the method was called on."
            ),
        ],
    ),
    (
        "TypeScript",
        [
            q!(
                "Which type should you prefer over any when the value's type is not yet known?",
                ["never", "object", "unknown", "void"],
                2,
                "unknown forces a type check before the value can be used."
            ),
            q!(
                "What does the Partial<T> utility type produce?",
                [
                    "A type with every property of T made optional",
                    "A type with every property of T made readonly",
                    "A type with only the required properties of T",
                    "A union of the property names of T"
                ],
                0,
                "Partial<T> maps each property of T to an optional one."
            ),
            q!(
                "Which operator narrows a union by checking for a property?",
                ["typeof", "in", "keyof", "as"],
                1,
                "The in operator narrows to union members that declare the property."
            ),
            q!(
                "What is the main difference between an interface and a type alias?",
                [
                    "Only type aliases can describe objects",
                    "Only interfaces can describe unions",
                    "Interfaces can be reopened by declaration merging",
                    "Type aliases are erased at runtime but interfaces are not"
                ],
                2,
                "Interfaces with the same name merge; type aliases cannot be reopened."
            ),
            q!(
                "Which compiler option enables strictNullChecks together with other strict checks?",
                ["noImplicitAny", "strict", "esModuleInterop", "isolatedModules"],
                1,
                "strict turns on the whole family of strict type-checking options."
            ),
        ],
    ),
    (
        "Node.js",
        [
            q!(
                "Which module is used to create an HTTP server without frameworks?",
                ["fs", "path", "http", "os"],
                2,
                "The built-in http module exposes createServer."
            ),
            q!(
                "What does process.nextTick() do?",
                [
                    "Schedules a callback after the current operation, before other queued I/O",
                    "Runs a callback on a worker thread",
                    "Delays a callback by one second",
                    "Stops the event loop"
                ],
                0,
                "nextTick callbacks run before the event loop continues to other phases."
            ),
            q!(
                "Which file lists a project's dependencies and scripts?",
                ["node_modules", "package.json", "index.js", ".npmrc"],
                1,
                "package.json describes the package, its scripts and dependencies."
            ),
            q!(
                "What is the recommended way to handle a CPU-heavy task without blocking requests?",
                [
                    "Wrap it in setTimeout",
                    "Run it inside a Promise",
                    "Use async/await",
                    "Move it to a worker thread"
                ],
                3,
                "Promises and timers still run on the main thread; worker_threads run in parallel."
            ),
            q!(
                "What are streams primarily used for in Node.js?",
                [
                    "Processing data incrementally without loading it all into memory",
                    "Defining REST routes",
                    "Encrypting passwords",
                    "Managing environment variables"
                ],
                0,
                "Streams process chunks as they arrive, keeping memory use bounded."
            ),
        ],
    ),
    (
        "CSS",
        [
            q!(
                "Which property creates a flex container?",
                ["position: flex", "display: flex", "float: flex", "flex: container"],
                1,
                "display: flex makes an element a flex container."
            ),
            q!(
                "Which selector has the highest specificity?",
                [".button", "button", "#submit", "div button"],
                2,
                "ID selectors outrank class and type selectors."
            ),
            q!(
                "What does box-sizing: border-box change?",
                [
                    "Width and height include padding and border",
                    "Borders are drawn outside the margin",
                    "The element becomes a block box",
                    "Margins collapse between siblings"
                ],
                0,
                "With border-box, padding and border are counted inside the declared size."
            ),
            q!(
                "Which unit is relative to the root element's font size?",
                ["em", "px", "rem", "vh"],
                2,
                "rem is relative to the font size of the html element."
            ),
            q!(
                "Which position value keeps an element fixed within its scroll container once a threshold is reached?",
                ["absolute", "relative", "static", "sticky"],
                3,
                "sticky behaves like relative until the offset threshold, then sticks."
            ),
        ],
    ),
    (
        "HTML",
        [
            q!(
                "Which element represents the dominant content of a document?",
                ["<section>", "<main>", "<article>", "<div>"],
                1,
                "<main> marks the primary content and should appear once per page."
            ),
            q!(
                "Which attribute provides alternative text for an image?",
                ["title", "src", "alt", "label"],
                2,
                "alt text is read by assistive technology and shown when the image fails."
            ),
            q!(
                "Which input type shows a date picker in supporting browsers?",
                ["text", "date", "calendar", "datetime-picker"],
                1,
                "type=\"date\" renders a native date control."
            ),
            q!(
                "What does the defer attribute on a <script> tag do?",
                [
                    "Runs the script after the document has been parsed",
                    "Prevents the script from running",
                    "Loads the script only on user interaction",
                    "Runs the script before the head is parsed"
                ],
                0,
                "Deferred scripts download in parallel and execute after parsing, in order."
            ),
            q!(
                "Which element associates a text caption with a form control?",
                ["<legend>", "<caption>", "<span>", "<label>"],
                3,
                "<label for=\"id\"> ties the caption to the control for clicks and screen readers."
            ),
        ],
    ),
    (
        "Vue.js",
        [
            q!(
                "Which directive renders a list from an array?",
                ["v-if", "v-for", "v-bind", "v-model"],
                1,
                "v-for repeats an element for each item in a source."
            ),
            q!(
                "What does v-model provide on a form input?",
                ["One-way binding", "Two-way binding", "Event delegation", "Conditional rendering"],
                1,
                "v-model keeps the input value and component state in sync."
            ),
            q!(
                "In the Composition API, which function creates a reactive primitive value?",
                ["reactive()", "computed()", "ref()", "watch()"],
                2,
                "ref() wraps a value in a reactive object with a .value property."
            ),
            q!(
                "What is a computed property best used for?",
                [
                    "Deriving cached values from reactive state",
                    "Making HTTP requests",
                    "Registering global components",
                    "Handling DOM events"
                ],
                0,
                "Computed values are cached until their reactive dependencies change."
            ),
            q!(
                "How does a child component notify its parent of an event?",
                ["By mutating the parent's props", "By calling this.$parent", "Through provide/inject", "By emitting an event"],
                3,
                "Children emit events that the parent listens to with v-on."
            ),
        ],
    ),
    (
        "Angular",
        [
            q!(
                "Which decorator marks a class as an Angular component?",
                ["@Injectable", "@NgModule", "@Component", "@Directive"],
                2,
                "@Component attaches template and selector metadata to a class."
            ),
            q!(
                "What is the purpose of dependency injection in Angular?",
                [
                    "To supply a class with the services it depends on",
                    "To compile templates ahead of time",
                    "To bundle CSS",
                    "To lazy-load routes"
                ],
                0,
                "The injector creates and provides service instances to consumers."
            ),
            q!(
                "Which syntax binds a DOM property to a component field?",
                ["(value)=\"field\"", "[value]=\"field\"", "{value}=\"field\"", "#value=\"field\""],
                1,
                "Square brackets denote property binding."
            ),
            q!(
                "Which library does Angular's HttpClient return results through?",
                ["Promises only", "Callbacks", "RxJS Observables", "Generators"],
                2,
                "HttpClient methods return cold RxJS Observables."
            ),
            q!(
                "Which lifecycle hook runs once after the first ngOnChanges?",
                ["ngAfterViewInit", "ngOnDestroy", "ngDoCheck", "ngOnInit"],
                3,
                "ngOnInit runs once after the component's inputs are first set."
            ),
        ],
    ),
    (
        "PHP",
        [
            q!(
                "Which symbol prefixes a variable name in PHP?",
                ["@", "$", "#", "&"],
                1,
                "All PHP variables start with $."
            ),
            q!(
                "Which function returns the number of elements in an array?",
                ["length()", "size()", "count()", "len()"],
                2,
                "count() returns the number of elements."
            ),
            q!(
                "What is the safest way to include user input in an SQL query with PDO?",
                [
                    "Prepared statements with bound parameters",
                    "String concatenation",
                    "addslashes() on the input",
                    "Casting the input to a string"
                ],
                0,
                "Bound parameters keep data separate from the SQL text."
            ),
            q!(
                "What does the === operator check?",
                ["Value only", "Type only", "Reference identity", "Value and type"],
                3,
                "=== is strict comparison: both value and type must match."
            ),
            q!(
                "Which superglobal holds data submitted by an HTML form using method=\"post\"?",
                ["$_GET", "$_POST", "$_SERVER", "$_SESSION"],
                1,
                "$_POST contains form fields sent in the request body."
            ),
        ],
    ),
];

/// Skills the bank has authored sets for, in table order.
pub fn supported_skills() -> Vec<&'static str> {
    BANK.iter().map(|(skill, _)| *skill).collect()
}

/// Returns the authored set for `skill`, or the default skill's set when the
/// name is unknown. Never fails.
pub fn lookup(skill: &str) -> QuizSet {
    let wanted = skill.trim();
    let entry = BANK
        .iter()
        .find(|(name, _)| *name == wanted)
        .or_else(|| BANK.iter().find(|(name, _)| name.eq_ignore_ascii_case(wanted)))
        .or_else(|| BANK.iter().find(|(name, _)| *name == DEFAULT_SKILL))
        .unwrap_or(&BANK[0]);

    let questions = &entry.1;
    QuizSet::from_array(std::array::from_fn(|i| questions[i].to_question()))
}

//! Fixed strings shown to the model or the reader, per locale.

use std::path::Path;
use taleweaver_core::Locale;

pub(crate) const SYSTEM_PROMPT_ZH: &str = "你是一个专业的故事生成器。你的任务是根据用户提供的设定和实时输入，生成连贯且引人入胜的故事。

关键要求：
1. 故事必须具有连续性，每次回应都要基于之前的所有情节发展
2. 认真分析对话历史，保持人物性格、情节走向的一致性
3. 当用户补充新的细节或提供新的发展方向时，自然地将其整合到现有故事中
4. 注意因果关系，确保每个情节的发生都有合理的铺垫和解释
5. 通过环境描写、人物对话等手法，让故事更加生动
6. 在故事发展的关键节点，可以给出一些暗示，引导用户参与情节推进

你不应该：
1. 重新开始新的故事
2. 忽视之前提到的重要情节或细节
3. 生成与已建立设定相矛盾的内容
4. 突兀地引入未经铺垫的重大转折

请记住：你正在创作一个持续发展的故事，而不是独立的片段。";

pub(crate) const SYSTEM_PROMPT_EN: &str = "You are a professional story generator. Your task is to write a coherent and engaging story from the settings and live input the user provides.

Key requirements:
1. The story must be continuous; every reply builds on all prior plot developments
2. Study the conversation history carefully and keep characters and plot direction consistent
3. When the user adds new details or a new direction, weave them naturally into the existing story
4. Mind cause and effect; every event needs reasonable setup and explanation
5. Use description of the setting and character dialogue to bring the story to life
6. At key moments in the story, you may offer hints that invite the user to steer the plot

You should not:
1. Start a new story
2. Ignore important events or details mentioned earlier
3. Produce content that contradicts established settings
4. Introduce major twists without setup

Remember: you are writing one continuously developing story, not separate fragments.";

/// Fixed system instruction for the locale.
pub(crate) fn system_prompt(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => SYSTEM_PROMPT_ZH,
        Locale::En => SYSTEM_PROMPT_EN,
    }
}

pub(crate) fn opening_prompt(
    locale: Locale,
    style: &str,
    theme: &str,
    character: &str,
    scene: &str,
) -> String {
    match locale {
        Locale::Zh => format!(
            "请基于以下设定开始讲述一个故事：\n\n风格：{style}\n主题：{theme}\n角色：{character}\n初始场景：{scene}\n\n请从这个场景开始，展开故事的开端。注意为后续发展留下铺垫。"
        ),
        Locale::En => format!(
            "Please begin a story based on the following settings:\n\nStyle: {style}\nTheme: {theme}\nCharacter: {character}\nOpening scene: {scene}\n\nStart from this scene and tell the beginning of the story. Leave room for later developments."
        ),
    }
}

pub(crate) fn continuation_prompt(
    locale: Locale,
    story_so_far: &str,
    style: &str,
    theme: &str,
    character: &str,
    new_input: &str,
) -> String {
    match locale {
        Locale::Zh => format!(
            "已经发生的故事情节：\n---\n{story_so_far}\n---\n\n故事设定提醒：\n- 风格：{style}\n- 主题：{theme}\n- 主要角色：{character}\n\n用户新的输入：{new_input}\n\n请基于以上已发生的情节和用户新的输入，自然地继续发展故事。注意：\n1. 新的发展必须与之前的情节保持连贯\n2. 合理化用户提供的新元素\n3. 注意人物性格的一致性\n4. 为后续发展留下可能性\n\n继续讲述："
        ),
        Locale::En => format!(
            "What has happened in the story so far:\n---\n{story_so_far}\n---\n\nSettings reminder:\n- Style: {style}\n- Theme: {theme}\n- Main character: {character}\n\nNew input from the user: {new_input}\n\nContinue the story naturally from the events above and the user's new input. Note:\n1. New developments must stay coherent with earlier events\n2. Make the user's new elements fit plausibly\n3. Keep the characters' personalities consistent\n4. Leave possibilities open for what comes next\n\nContinue:"
        ),
    }
}

/// Assistant text recorded when generation fails.
///
/// ```
/// use taleweaver_core::Locale;
/// use taleweaver_story::apology;
///
/// assert_eq!(
///     apology(Locale::Zh, "timeout"),
///     "抱歉，生成故事时遇到了问题：timeout\n请稍后重试。"
/// );
/// ```
pub fn apology(locale: Locale, detail: &str) -> String {
    match locale {
        Locale::Zh => format!("抱歉，生成故事时遇到了问题：{detail}\n请稍后重试。"),
        Locale::En => format!(
            "Sorry, something went wrong while generating the story: {detail}\nPlease try again later."
        ),
    }
}

/// Suffix recorded when a turn is abandoned before its reply finished.
pub fn interrupted_notice(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => "（生成已中断）",
        Locale::En => "(generation interrupted)",
    }
}

/// Status line for the outcome of a save.
///
/// `Ok(None)` means there was nothing to save.
pub fn save_status(locale: Locale, outcome: Result<Option<&Path>, &str>) -> String {
    match (locale, outcome) {
        (Locale::Zh, Ok(Some(path))) => format!("故事已保存至 {}", path.display()),
        (Locale::Zh, Ok(None)) => "故事为空,无法保存".to_string(),
        (Locale::Zh, Err(e)) => format!("保存失败: {e}"),
        (Locale::En, Ok(Some(path))) => format!("Story saved to {}", path.display()),
        (Locale::En, Ok(None)) => "The story is empty, nothing to save".to_string(),
        (Locale::En, Err(e)) => format!("Save failed: {e}"),
    }
}

pub(crate) fn user_label(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => "用户",
        Locale::En => "User",
    }
}

pub(crate) const ASSISTANT_LABEL: &str = "AI";
